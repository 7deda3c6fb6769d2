use chrono::{DateTime, Utc};

use crate::errors::CoreError;
use crate::models::form::TipInput;
use crate::models::record::CalculationRecord;
use crate::models::tip_out::{parse_amount, TipOuts};

/// Tip-out calculation and the rules for logging a calculation.
///
/// Pure business logic over raw input text: malformed numbers are a
/// "not ready" state, never an error.
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    /// Tip-outs for the sales text; zero when it does not parse or is negative.
    pub fn tip_outs(&self, sales_text: &str) -> TipOuts {
        match parse_amount(sales_text) {
            Some(sales) if sales >= 0.0 => TipOuts::from_sales(sales),
            _ => TipOuts::ZERO,
        }
    }

    /// Whether the tip-out section (and take-home input) should be shown:
    /// sales parses to a strictly positive amount.
    pub fn shows_tip_outs(&self, sales_text: &str) -> bool {
        parse_amount(sales_text).is_some_and(|s| s > 0.0)
    }

    /// `true` iff sales parses to > 0 and take-home parses to ≥ 0.
    pub fn can_log(&self, sales_text: &str, take_home_text: &str) -> bool {
        self.parse_loggable(sales_text, take_home_text).is_some()
    }

    /// Build the record for a log action stamped at `now`.
    ///
    /// Fails with `ValidationError` when `can_log` would be false.
    pub fn create_record(
        &self,
        sales_text: &str,
        take_home_text: &str,
        now: DateTime<Utc>,
    ) -> Result<CalculationRecord, CoreError> {
        let (sales, take_home) = self
            .parse_loggable(sales_text, take_home_text)
            .ok_or_else(|| {
                CoreError::ValidationError(format!(
                    "Cannot log calculation: sales '{sales_text}' must be a positive number \
                     and take-home '{take_home_text}' a non-negative number"
                ))
            })?;
        Ok(CalculationRecord::new(sales, take_home, now))
    }

    /// Interpret the text typed into the daily tip editor.
    pub fn interpret_tip_input(&self, text: &str) -> TipInput {
        if text.trim().is_empty() {
            return TipInput::Blank;
        }
        match parse_amount(text) {
            Some(amount) if amount >= 0.0 => TipInput::Amount(amount),
            _ => TipInput::Invalid,
        }
    }

    fn parse_loggable(&self, sales_text: &str, take_home_text: &str) -> Option<(f64, f64)> {
        let sales = parse_amount(sales_text).filter(|s| *s > 0.0)?;
        let take_home = parse_amount(take_home_text).filter(|t| *t >= 0.0)?;
        Some((sales, take_home))
    }
}

impl Default for CalculatorService {
    fn default() -> Self {
        Self::new()
    }
}
