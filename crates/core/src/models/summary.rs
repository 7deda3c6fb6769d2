use serde::{Deserialize, Serialize};

/// Totals of the calculation log for one month.
///
/// `has_records` separates "no data this month" from a genuine zero total.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationSummary {
    pub total_sales: f64,
    pub total_tip_out_1: f64,
    pub total_tip_out_2: f64,
    /// Sum of the take-home tips logged with the records
    pub total_take_home: f64,
    pub record_count: usize,
    pub has_records: bool,
}

/// Total of the daily tip table for one month.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyTipTotal {
    pub total: f64,
    /// Number of days with a recorded tip
    pub entry_count: usize,
}

impl DailyTipTotal {
    pub fn has_entries(&self) -> bool {
        self.entry_count > 0
    }
}

/// What the monthly calculation summary should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryView {
    /// The calculation log has not finished its initial load
    Loading,
    /// Loaded, but nothing was logged in the displayed month
    Empty,
    /// Loaded and at least one record matched
    Totals(CalculationSummary),
}
