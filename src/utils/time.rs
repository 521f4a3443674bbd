//! Timestamp formatting for CLI output.

use chrono::{DateTime, Local, Utc};

/// Local "YYYY-MM-DD HH:MM" representation.
pub fn format_local(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_optional(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(format_local).unwrap_or_else(|| "--".to_string())
}

/// Time spent on the premises, e.g. "1h 05m" (up to `until`, or now while still inside).
pub fn stay_duration(in_time: &DateTime<Utc>, out_time: Option<&DateTime<Utc>>) -> String {
    let until = out_time.copied().unwrap_or_else(Utc::now);
    let mins = (until - *in_time).num_minutes().max(0);
    format!("{}h {:02}m", mins / 60, mins % 60)
}
