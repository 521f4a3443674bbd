//! ANSI color helper utilities for terminal output.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Visitor status: green while on premises, grey once checked out.
pub fn color_for_status(active: bool) -> &'static str {
    if active { GREEN } else { GREY }
}

/// Returns GREY for an empty field ("" or "--"), RESET otherwise.
pub fn color_for_optional_field(value: &str) -> &'static str {
    let v = value.trim();
    if v.is_empty() || v == "--" { GREY } else { RESET }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

fn ansi_escape() -> Option<&'static Regex> {
    static ANSI_ESCAPE: LazyLock<Option<Regex>> =
        LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());
    ANSI_ESCAPE.as_ref()
}

pub fn strip_ansi(s: &str) -> String {
    match ansi_escape() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Terminal columns taken by `s`: escapes removed, wide glyphs counted twice.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}
