use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::month::YearMonth;
use super::tip_out::TipOuts;

/// One logged snapshot of a sales-to-tip-out computation plus the take-home
/// figure the user entered alongside it.
///
/// Tip-outs are fixed at creation time and never recomputed. Field names on
/// the wire are camelCase (`tipOut1`, `takeHomeTip`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    /// Opaque unique identifier
    pub id: String,

    /// Sales amount the tip-outs were computed from
    pub sales: f64,

    /// Primary tip-out at the time of logging
    #[serde(rename = "tipOut1")]
    pub tip_out_1: f64,

    /// Secondary tip-out at the time of logging
    #[serde(rename = "tipOut2")]
    pub tip_out_2: f64,

    /// Take-home tip entered with this calculation
    pub take_home_tip: f64,

    /// Instant the record was logged
    pub timestamp: DateTime<Utc>,
}

impl CalculationRecord {
    pub fn new(sales: f64, take_home_tip: f64, timestamp: DateTime<Utc>) -> Self {
        let tip_outs = TipOuts::from_sales(sales);
        Self {
            id: Uuid::new_v4().to_string(),
            sales,
            tip_out_1: tip_outs.tip1,
            tip_out_2: tip_outs.tip2,
            take_home_tip,
            timestamp,
        }
    }

    /// Month this record belongs to when its timestamp is read in `tz`.
    pub fn month_in<Tz: TimeZone>(&self, tz: &Tz) -> YearMonth {
        YearMonth::from_date(self.timestamp.with_timezone(tz).date_naive())
    }
}

/// Append-only, insertion-ordered list of calculation records.
///
/// The log has no removal path: it changes only by appending, or by being
/// replaced wholesale on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationLog {
    records: Vec<CalculationRecord>,
}

impl CalculationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: CalculationRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalculationRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: &str) -> Option<&CalculationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records whose timestamp falls in `month` when read in `tz`.
    pub fn in_month<'a, Tz: TimeZone + 'a>(
        &'a self,
        month: YearMonth,
        tz: &'a Tz,
    ) -> impl Iterator<Item = &'a CalculationRecord> + 'a {
        self.records.iter().filter(move |r| r.month_in(tz) == month)
    }
}

impl From<Vec<CalculationRecord>> for CalculationLog {
    fn from(records: Vec<CalculationRecord>) -> Self {
        Self { records }
    }
}
