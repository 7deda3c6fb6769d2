use chrono::NaiveDate;

use super::month::YearMonth;

/// One day cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Recorded take-home tip, if any
    pub tip: Option<f64>,
    pub is_selected: bool,
    pub is_today: bool,
}

impl CalendarDay {
    pub fn has_tip(&self) -> bool {
        self.tip.is_some()
    }
}

/// A cell of the 7-column week grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalendarCell {
    /// Alignment cell before day 1 or after the last day; carries no date
    Padding,
    Day(CalendarDay),
}

impl CalendarCell {
    pub fn day(&self) -> Option<&CalendarDay> {
        match self {
            CalendarCell::Padding => None,
            CalendarCell::Day(day) => Some(day),
        }
    }
}

/// Sunday-first month grid, always a whole number of weeks.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth {
    pub month: YearMonth,
    /// Weekday of day 1 (0 = Sunday), also the number of leading padding cells
    pub first_weekday: u32,
    pub cells: Vec<CalendarCell>,
}

impl CalendarMonth {
    pub fn weeks(&self) -> std::slice::Chunks<'_, CalendarCell> {
        self.cells.chunks(7)
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> + '_ {
        self.cells.iter().filter_map(CalendarCell::day)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days().find(|d| d.date == date)
    }
}

/// Displayed month plus the (independent) selected day of the daily tip log.
///
/// Month navigation never touches the selection, even when the selected day
/// falls outside the newly displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarNavigator {
    displayed: YearMonth,
    selected: Option<NaiveDate>,
}

impl CalendarNavigator {
    pub fn new(displayed: YearMonth) -> Self {
        Self {
            displayed,
            selected: None,
        }
    }

    pub fn displayed(&self) -> YearMonth {
        self.displayed
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Select `date`, replacing any prior selection.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    pub fn show_month(&mut self, month: YearMonth) {
        self.displayed = month;
    }

    pub fn prev_month(&mut self) {
        self.displayed = self.displayed.prev();
    }

    pub fn next_month(&mut self) {
        self.displayed = self.displayed.next();
    }
}
