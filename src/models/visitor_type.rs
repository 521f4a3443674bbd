use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitorType {
    Delivery,
    Relative,
    Guest,
}

impl VisitorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitorType::Delivery => "delivery",
            VisitorType::Relative => "relative",
            VisitorType::Guest => "guest",
        }
    }

    /// Parse CLI input (case-insensitive)
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "delivery" => Some(VisitorType::Delivery),
            "relative" => Some(VisitorType::Relative),
            "guest" => Some(VisitorType::Guest),
            _ => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            VisitorType::Delivery => "📦",
            VisitorType::Relative => "👪",
            VisitorType::Guest => "👤",
        }
    }
}

impl fmt::Display for VisitorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
