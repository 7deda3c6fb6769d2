use chrono::TimeZone;

use crate::models::daily_tip::DailyTips;
use crate::models::month::YearMonth;
use crate::models::record::CalculationLog;
use crate::models::summary::{CalculationSummary, DailyTipTotal, SummaryView};

/// Monthly folds over the two stores.
///
/// Both are read-only; the calculation fold attributes records to months by
/// reading their timestamps in a caller-chosen time zone.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Sum sales and both tip-outs over the records logged in `month`.
    pub fn calculation_summary<Tz: TimeZone>(
        &self,
        log: &CalculationLog,
        month: YearMonth,
        tz: &Tz,
    ) -> CalculationSummary {
        log.in_month(month, tz)
            .fold(CalculationSummary::default(), |mut acc, record| {
                acc.total_sales += record.sales;
                acc.total_tip_out_1 += record.tip_out_1;
                acc.total_tip_out_2 += record.tip_out_2;
                acc.total_take_home += record.take_home_tip;
                acc.record_count += 1;
                acc.has_records = true;
                acc
            })
    }

    /// Total of the daily tips recorded in `month`.
    pub fn daily_tip_total(&self, tips: &DailyTips, month: YearMonth) -> DailyTipTotal {
        tips.in_month(month)
            .fold(DailyTipTotal::default(), |mut acc, (_, amount)| {
                acc.total += amount;
                acc.entry_count += 1;
                acc
            })
    }

    /// Display state of the calculation summary. `loaded` gates everything so
    /// a month never looks empty while the log is still being read.
    pub fn calculation_view<Tz: TimeZone>(
        &self,
        log: &CalculationLog,
        loaded: bool,
        month: YearMonth,
        tz: &Tz,
    ) -> SummaryView {
        if !loaded {
            return SummaryView::Loading;
        }
        let summary = self.calculation_summary(log, month, tz);
        if summary.has_records {
            SummaryView::Totals(summary)
        } else {
            SummaryView::Empty
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
