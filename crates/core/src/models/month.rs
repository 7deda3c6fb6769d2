use chrono::{Datelike, Months, NaiveDate};

use crate::errors::CoreError;

/// A calendar month cursor: a (year, month) pair with no day component.
///
/// Internally anchored on the first day of the month so every value is a
/// representable chrono date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Build a cursor from a year and a 1-based month.
    pub fn new(year: i32, month: u32) -> Result<Self, CoreError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| {
                CoreError::ValidationError(format!("Invalid year/month: {year}-{month:02}"))
            })
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first + chrono::Days::new(u64::from(self.days_in_month()) - 1)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.first).num_days() as u32,
            // Only December of chrono's last year has no successor
            None => 31,
        }
    }

    /// Following month; December wraps into January of the next year.
    /// Saturates at the end of chrono's date range.
    #[must_use]
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// Preceding month; January wraps into December of the previous year.
    #[must_use]
    pub fn prev(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// English month name, e.g. "July".
    pub fn name(&self) -> &'static str {
        match chrono::Month::try_from(self.month() as u8) {
            Ok(m) => m.name(),
            Err(_) => "",
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name(), self.year())
    }
}
