pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use chrono::{Local, NaiveDate};
use models::{
    calendar::{CalendarMonth, CalendarNavigator},
    daily_tip::DailyTips,
    form::{SalesForm, TipEditor, TipInput, TipSaveOutcome},
    month::YearMonth,
    record::{CalculationLog, CalculationRecord},
    settings::Settings,
    summary::{CalculationSummary, DailyTipTotal, SummaryView},
    tip_out::{format_amount, TipOuts},
};
use providers::clock::{Clock, SystemClock};
use services::{
    calculator_service::CalculatorService, calendar_service::CalendarService,
    summary_service::SummaryService,
};
use storage::{
    backend::StorageBackend,
    container::{Listener, Persisted},
};

use errors::CoreError;

/// Main entry point for the Tip Tracker core library.
///
/// Holds the calculator form, the two persisted stores (calculation log and
/// daily tips), the calendar navigator and the independent summary month
/// cursor. Every mutation runs synchronously; store changes are written
/// straight through to the backend once the store has been loaded.
#[must_use]
pub struct TipTracker {
    settings: Settings,
    backend: Box<dyn StorageBackend>,
    clock: Box<dyn Clock>,
    form: SalesForm,
    calculations: Persisted<CalculationLog>,
    daily_tips: Persisted<DailyTips>,
    navigator: CalendarNavigator,
    summary_month: YearMonth,
    calculator: CalculatorService,
    summary_service: SummaryService,
    calendar_service: CalendarService,
}

impl std::fmt::Debug for TipTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TipTracker")
            .field("backend", &self.backend.name())
            .field("records", &self.calculations.get().len())
            .field("daily_tips", &self.daily_tips.get().len())
            .field("calendar_month", &self.navigator.displayed())
            .field("selected", &self.navigator.selected())
            .field("summary_month", &self.summary_month)
            .finish()
    }
}

impl TipTracker {
    /// Create a tracker over `backend` using the system clock.
    /// Nothing is read until [`TipTracker::load`] runs.
    pub fn new(backend: Box<dyn StorageBackend>, settings: Settings) -> Self {
        Self::with_clock(backend, settings, Box::new(SystemClock))
    }

    /// Create a tracker with an injected clock.
    pub fn with_clock(
        backend: Box<dyn StorageBackend>,
        settings: Settings,
        clock: Box<dyn Clock>,
    ) -> Self {
        let today = clock.now().with_timezone(&Local).date_naive();
        let current_month = YearMonth::from_date(today);

        Self {
            calculations: Persisted::new(settings.calculation_records_key.clone()),
            daily_tips: Persisted::new(settings.daily_tips_key.clone()),
            settings,
            backend,
            clock,
            form: SalesForm::default(),
            navigator: CalendarNavigator::new(current_month),
            summary_month: current_month,
            calculator: CalculatorService::new(),
            summary_service: SummaryService::new(),
            calendar_service: CalendarService::new(),
        }
    }

    /// Create a tracker and immediately rehydrate both stores.
    pub fn open(backend: Box<dyn StorageBackend>, settings: Settings) -> Self {
        let mut tracker = Self::new(backend, settings);
        tracker.load();
        tracker
    }

    /// Rehydrate both stores from the backend (once per store).
    /// Read failures are logged and leave the affected store empty.
    pub fn load(&mut self) {
        self.daily_tips.load(self.backend.as_ref());
        self.calculations.load(self.backend.as_ref());
    }

    /// Returns `true` once both stores finished their initial load.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.daily_tips.is_loaded() && self.calculations.is_loaded()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Today's date in the local time zone, per the injected clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.now().with_timezone(&Local).date_naive()
    }

    // ── Tip-Out Calculator ──────────────────────────────────────────

    pub fn set_sales_input(&mut self, text: impl Into<String>) {
        self.form.sales_input = text.into();
    }

    #[must_use]
    pub fn sales_input(&self) -> &str {
        &self.form.sales_input
    }

    pub fn set_take_home_input(&mut self, text: impl Into<String>) {
        self.form.take_home_input = text.into();
    }

    #[must_use]
    pub fn take_home_input(&self) -> &str {
        &self.form.take_home_input
    }

    /// Tip-outs for the current sales text (zero when it is not usable).
    #[must_use]
    pub fn tip_outs(&self) -> TipOuts {
        self.calculator.tip_outs(&self.form.sales_input)
    }

    /// Whether the tip-out results and take-home input should be displayed.
    #[must_use]
    pub fn shows_tip_outs(&self) -> bool {
        self.calculator.shows_tip_outs(&self.form.sales_input)
    }

    // ── Calculation Log ─────────────────────────────────────────────

    #[must_use]
    pub fn can_log(&self) -> bool {
        self.calculator
            .can_log(&self.form.sales_input, &self.form.take_home_input)
    }

    /// Log the current inputs as a new record, then clear both inputs.
    ///
    /// Fails with `ValidationError` (and leaves the inputs untouched) when
    /// `can_log()` is false.
    pub fn log_calculation(&mut self) -> Result<CalculationRecord, CoreError> {
        let record = self.calculator.create_record(
            &self.form.sales_input,
            &self.form.take_home_input,
            self.clock.now(),
        )?;

        let appended = record.clone();
        self.calculations
            .update(self.backend.as_ref(), |log| log.append(appended));
        self.form.clear();

        log::debug!("Logged calculation {} (sales {})", record.id, record.sales);
        Ok(record)
    }

    /// All records in insertion order.
    #[must_use]
    pub fn calculation_records(&self) -> &[CalculationRecord] {
        self.calculations.get().records()
    }

    #[must_use]
    pub fn calculation_count(&self) -> usize {
        self.calculations.get().len()
    }

    // ── Daily Tips ──────────────────────────────────────────────────

    /// Record `amount` for `date`; a non-positive amount removes the day.
    pub fn set_tip(&mut self, date: NaiveDate, amount: f64) {
        self.daily_tips
            .update(self.backend.as_ref(), |tips| tips.set(date, amount));
    }

    /// Remove the tip recorded for `date`, if any.
    pub fn clear_tip(&mut self, date: NaiveDate) {
        self.daily_tips
            .update(self.backend.as_ref(), |tips| tips.clear(date));
    }

    #[must_use]
    pub fn get_tip(&self, date: NaiveDate) -> Option<f64> {
        self.daily_tips.get().get(date)
    }

    #[must_use]
    pub fn daily_tips(&self) -> &DailyTips {
        self.daily_tips.get()
    }

    // ── Calendar Navigator ──────────────────────────────────────────

    /// Select a day, replacing any prior selection.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.navigator.select_date(date);
    }

    #[must_use]
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.navigator.selected()
    }

    /// Tip recorded for the selected day; `None` when nothing is selected or
    /// the day has no entry.
    #[must_use]
    pub fn selected_tip(&self) -> Option<f64> {
        self.navigator.selected().and_then(|d| self.get_tip(d))
    }

    #[must_use]
    pub fn calendar_month(&self) -> YearMonth {
        self.navigator.displayed()
    }

    /// Show the previous month of the daily log. The selection is kept.
    pub fn calendar_prev_month(&mut self) {
        self.navigator.prev_month();
    }

    /// Show the next month of the daily log. The selection is kept.
    pub fn calendar_next_month(&mut self) {
        self.navigator.next_month();
    }

    /// Month grid of the displayed daily-log month.
    #[must_use]
    pub fn calendar_grid(&self) -> CalendarMonth {
        self.calendar_service.month_grid(
            self.navigator.displayed(),
            self.daily_tips.get(),
            self.navigator.selected(),
            self.today(),
        )
    }

    // ── Tip Editor ──────────────────────────────────────────────────

    /// Draft for editing the selected day's tip. `None` without a selection.
    #[must_use]
    pub fn open_tip_editor(&self) -> Option<TipEditor> {
        let date = self.navigator.selected()?;
        let current = self.get_tip(date);
        Some(TipEditor {
            date,
            input: current.map(|a| a.to_string()).unwrap_or_default(),
            is_edit: current.is_some_and(|a| a > 0.0),
        })
    }

    /// Save editor text for the selected day.
    ///
    /// A non-negative amount is recorded (zero clears the day), blank text
    /// clears the day, anything else leaves it untouched. Without a selected
    /// day nothing happens.
    pub fn save_tip_input(&mut self, text: &str) -> TipSaveOutcome {
        let Some(date) = self.navigator.selected() else {
            return TipSaveOutcome::Ignored;
        };

        match self.calculator.interpret_tip_input(text) {
            TipInput::Amount(amount) if amount > 0.0 => {
                self.set_tip(date, amount);
                TipSaveOutcome::Saved(amount)
            }
            TipInput::Amount(_) | TipInput::Blank => {
                self.clear_tip(date);
                TipSaveOutcome::Cleared
            }
            TipInput::Invalid => {
                log::debug!("Ignoring tip input '{text}' for {date}");
                TipSaveOutcome::Ignored
            }
        }
    }

    // ── Monthly Summaries ───────────────────────────────────────────

    /// Total of the daily tips in the displayed calendar month.
    /// Zero while the daily tip store is still loading.
    #[must_use]
    pub fn monthly_tip_total(&self) -> DailyTipTotal {
        if !self.daily_tips.is_loaded() {
            return DailyTipTotal::default();
        }
        self.summary_service
            .daily_tip_total(self.daily_tips.get(), self.navigator.displayed())
    }

    #[must_use]
    pub fn summary_month(&self) -> YearMonth {
        self.summary_month
    }

    pub fn summary_prev_month(&mut self) {
        self.summary_month = self.summary_month.prev();
    }

    pub fn summary_next_month(&mut self) {
        self.summary_month = self.summary_month.next();
    }

    /// Calculation totals for the summary month (local time zone).
    /// Empty while the calculation log is still loading.
    #[must_use]
    pub fn calculation_summary(&self) -> CalculationSummary {
        if !self.calculations.is_loaded() {
            return CalculationSummary::default();
        }
        self.summary_service
            .calculation_summary(self.calculations.get(), self.summary_month, &Local)
    }

    /// Loading / empty / totals state of the calculation summary.
    #[must_use]
    pub fn calculation_view(&self) -> SummaryView {
        self.summary_service.calculation_view(
            self.calculations.get(),
            self.calculations.is_loaded(),
            self.summary_month,
            &Local,
        )
    }

    // ── Subscriptions & Persistence Health ──────────────────────────

    /// Run `listener` after every change to the calculation log.
    pub fn subscribe_calculations(&mut self, listener: Listener<CalculationLog>) {
        self.calculations.subscribe(listener);
    }

    /// Run `listener` after every change to the daily tip table.
    pub fn subscribe_daily_tips(&mut self, listener: Listener<DailyTips>) {
        self.daily_tips.subscribe(listener);
    }

    /// Most recent unrecovered persistence failure of either store.
    #[must_use]
    pub fn last_persistence_error(&self) -> Option<&CoreError> {
        self.calculations
            .last_error()
            .or_else(|| self.daily_tips.last_error())
    }

    // ── Display ─────────────────────────────────────────────────────

    /// Format an amount with the configured currency symbol, e.g. `$11.00`.
    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        format_amount(&self.settings.currency_symbol, amount)
    }
}
