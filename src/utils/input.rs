//! Parsing and prompting helpers for CLI input.

use crate::errors::{AppError, AppResult};
use crate::models::{FamilyMemberInput, VisitorType};
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Parse a `NAME:AGE:RELATION` family member spec.
pub fn parse_member(spec: &str) -> AppResult<FamilyMemberInput> {
    let parts: Vec<&str> = spec.splitn(3, ':').map(str::trim).collect();
    match parts.as_slice() {
        [name, age, relation] if !name.is_empty() => {
            let age = age
                .parse::<u32>()
                .map_err(|_| AppError::InvalidMember(spec.to_string()))?;
            Ok(FamilyMemberInput::new(name, age, relation))
        }
        _ => Err(AppError::InvalidMember(spec.to_string())),
    }
}

pub fn parse_visitor_type(s: &str) -> AppResult<VisitorType> {
    VisitorType::from_input(s).ok_or_else(|| AppError::InvalidVisitorType(s.to_string()))
}
