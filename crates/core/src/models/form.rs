use chrono::NaiveDate;

/// Raw text of the two calculator inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesForm {
    pub sales_input: String,
    pub take_home_input: String,
}

impl SalesForm {
    pub fn clear(&mut self) {
        self.sales_input.clear();
        self.take_home_input.clear();
    }
}

/// Draft shown when editing the tip of the selected day.
#[derive(Debug, Clone, PartialEq)]
pub struct TipEditor {
    pub date: NaiveDate,
    /// Pre-filled with the recorded amount, empty when none
    pub input: String,
    /// `true` when a positive amount is already recorded ("Edit" vs "Add")
    pub is_edit: bool,
}

impl TipEditor {
    pub fn title(&self) -> &'static str {
        if self.is_edit {
            "Edit Tip"
        } else {
            "Add Tip"
        }
    }
}

/// How a tip editor input was interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TipInput {
    /// Parsed to a non-negative amount (zero clears the day)
    Amount(f64),
    /// Blank input, clears the day
    Blank,
    /// Unparseable or negative, leaves the day untouched
    Invalid,
}

/// Result of saving a tip editor input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TipSaveOutcome {
    Saved(f64),
    Cleared,
    Ignored,
}
