use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::errors::CoreError;

use super::month::YearMonth;

/// Format of a daily tip key: an ISO calendar date.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Render a calendar date as its storage key, e.g. `2024-07-28`.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a storage key back into a calendar date.
pub fn parse_date_key(key: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .map_err(|e| CoreError::InvalidDateKey(format!("'{key}': {e}")))
}

/// Take-home tip recorded per calendar day.
///
/// A date is present iff its amount is strictly positive: writing zero (or
/// anything non-positive) removes the entry instead of storing it. At most
/// one amount per date; a write replaces, never accumulates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyTips {
    entries: BTreeMap<NaiveDate, f64>,
}

impl DailyTips {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `amount` for `date`, or remove the entry when `amount` is not a
    /// positive finite number. Returns the previously recorded amount.
    pub fn set(&mut self, date: NaiveDate, amount: f64) -> Option<f64> {
        if amount.is_finite() && amount > 0.0 {
            self.entries.insert(date, amount)
        } else {
            self.entries.remove(&date)
        }
    }

    /// Remove the entry for `date`. Returns the amount that was recorded.
    pub fn clear(&mut self, date: NaiveDate) -> Option<f64> {
        self.entries.remove(&date)
    }

    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.entries.get(&date).copied()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.entries.iter().map(|(d, a)| (*d, *a))
    }

    /// Entries dated within `month`, in date order.
    pub fn in_month(&self, month: YearMonth) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.entries
            .range(month.first_day()..=month.last_day())
            .map(|(d, a)| (*d, *a))
    }
}
