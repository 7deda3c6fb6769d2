use chrono::{Datelike, NaiveDate};

use crate::models::calendar::{CalendarCell, CalendarDay, CalendarMonth};
use crate::models::daily_tip::DailyTips;
use crate::models::month::YearMonth;

/// Lays out the month grid of the daily tip log.
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Build the Sunday-first grid for `month`.
    ///
    /// Leading padding equals the weekday of day 1; trailing padding fills the
    /// last week so the cell count is a multiple of 7.
    pub fn month_grid(
        &self,
        month: YearMonth,
        tips: &DailyTips,
        selected: Option<NaiveDate>,
        today: NaiveDate,
    ) -> CalendarMonth {
        let first_weekday = month.first_day().weekday().num_days_from_sunday();
        let days_in_month = month.days_in_month();

        let mut cells = Vec::with_capacity(42);
        cells.extend((0..first_weekday).map(|_| CalendarCell::Padding));

        for date in month.first_day().iter_days().take(days_in_month as usize) {
            cells.push(CalendarCell::Day(CalendarDay {
                date,
                tip: tips.get(date),
                is_selected: selected == Some(date),
                is_today: date == today,
            }));
        }

        let trailing = (7 - cells.len() % 7) % 7;
        cells.extend((0..trailing).map(|_| CalendarCell::Padding));

        log::debug!(
            "Built calendar grid for {month}: {days_in_month} days, {} cells",
            cells.len()
        );

        CalendarMonth {
            month,
            first_weekday,
            cells,
        }
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}
