use std::collections::BTreeMap;

use crate::errors::CoreError;
use crate::models::daily_tip::{date_key, parse_date_key, DailyTips};
use crate::models::record::{CalculationLog, CalculationRecord};

/// A store that is persisted as one complete JSON snapshot.
///
/// Snapshot layouts:
/// ```text
/// daily tips:       {"2024-07-28": 50.75, "2024-07-29": 12.0}
/// calculation log:  [{"id": "...", "sales": 200.0, "tipOut1": 11.0,
///                     "tipOut2": 5.0, "takeHomeTip": 15.0,
///                     "timestamp": "2024-07-28T21:04:11.512Z"}, ...]
/// ```
pub trait Snapshot: Sized {
    /// Label used in log messages.
    const LABEL: &'static str;

    fn encode(&self) -> Result<String, CoreError>;

    fn decode(data: &str) -> Result<Self, CoreError>;
}

impl Snapshot for DailyTips {
    const LABEL: &'static str = "daily tips";

    fn encode(&self) -> Result<String, CoreError> {
        let table: BTreeMap<String, f64> = self.iter().map(|(d, a)| (date_key(d), a)).collect();
        serde_json::to_string(&table)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize daily tips: {e}")))
    }

    /// Whole-document errors fail; individual bad entries are skipped.
    fn decode(data: &str) -> Result<Self, CoreError> {
        let table: BTreeMap<String, serde_json::Value> = serde_json::from_str(data)
            .map_err(|e| CoreError::Deserialization(format!("Failed to parse daily tips: {e}")))?;

        let mut tips = DailyTips::new();
        for (key, value) in table {
            let date = match parse_date_key(&key) {
                Ok(date) => date,
                Err(e) => {
                    log::warn!("Skipping daily tip entry: {e}");
                    continue;
                }
            };
            match value.as_f64() {
                Some(amount) if amount.is_finite() && amount > 0.0 => {
                    tips.set(date, amount);
                }
                _ => log::warn!("Skipping daily tip entry '{key}': amount {value} is not positive"),
            }
        }
        Ok(tips)
    }
}

impl Snapshot for CalculationLog {
    const LABEL: &'static str = "calculation records";

    fn encode(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize calculation records: {e}"))
        })
    }

    /// Whole-document errors fail; records that do not deserialize are skipped.
    /// Insertion order of the surviving records is kept.
    fn decode(data: &str) -> Result<Self, CoreError> {
        let values: Vec<serde_json::Value> = serde_json::from_str(data).map_err(|e| {
            CoreError::Deserialization(format!("Failed to parse calculation records: {e}"))
        })?;

        let mut log = CalculationLog::new();
        for (idx, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<CalculationRecord>(value) {
                Ok(record) => log.append(record),
                Err(e) => log::warn!("Skipping calculation record #{idx}: {e}"),
            }
        }
        Ok(log)
    }
}
