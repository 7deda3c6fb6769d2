use serde::{Deserialize, Serialize};

/// Storage key of the daily tip table.
pub const DEFAULT_DAILY_TIPS_KEY: &str = "tipAppDailyTips";

/// Storage key of the calculation log.
pub const DEFAULT_CALCULATION_RECORDS_KEY: &str = "tipAppCalculationRecords";

/// Host-configurable settings. The tip-out rates are fixed and live in
/// [`crate::models::tip_out`], not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Symbol prefixed to every displayed amount (e.g., "$").
    pub currency_symbol: String,

    /// Key under which the daily tip table snapshot is stored.
    pub daily_tips_key: String,

    /// Key under which the calculation log snapshot is stored.
    pub calculation_records_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            daily_tips_key: DEFAULT_DAILY_TIPS_KEY.to_string(),
            calculation_records_key: DEFAULT_CALCULATION_RECORDS_KEY.to_string(),
        }
    }
}
