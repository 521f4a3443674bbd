use serde::Serialize;

/// Dashboard counters, always derived from the stored collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LogbookStats {
    pub total_residents: usize,
    pub total_visitors: usize,
    pub active_visitors: usize,
    pub visitors_today: usize,
}
