// ═══════════════════════════════════════════════════════════════════
// Model Tests — tip-outs, amount parsing, months, daily tips,
// calculation records, calendar navigator, tip editor
// ═══════════════════════════════════════════════════════════════════

use chrono::{NaiveDate, TimeZone, Utc};
use tip_tracker_core::models::calendar::CalendarNavigator;
use tip_tracker_core::models::daily_tip::{date_key, parse_date_key, DailyTips};
use tip_tracker_core::models::form::{SalesForm, TipEditor};
use tip_tracker_core::models::month::YearMonth;
use tip_tracker_core::models::record::{CalculationLog, CalculationRecord};
use tip_tracker_core::models::settings::Settings;
use tip_tracker_core::models::tip_out::{
    format_amount, parse_amount, rate_label, TipOuts, TIP_PERCENTAGE_1, TIP_PERCENTAGE_2,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn ym(y: i32, m: u32) -> YearMonth {
    YearMonth::new(y, m).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ═══════════════════════════════════════════════════════════════════
// parse_amount
// ═══════════════════════════════════════════════════════════════════

mod amount_parsing {
    use super::*;

    #[test]
    fn plain_integer() {
        assert_eq!(parse_amount("200"), Some(200.0));
    }

    #[test]
    fn decimal() {
        assert_eq!(parse_amount("50.75"), Some(50.75));
    }

    #[test]
    fn leading_whitespace_is_skipped() {
        assert_eq!(parse_amount("   7.5"), Some(7.5));
    }

    #[test]
    fn trailing_garbage_uses_numeric_prefix() {
        assert_eq!(parse_amount("12abc"), Some(12.0));
        assert_eq!(parse_amount("3.5.6"), Some(3.5));
    }

    #[test]
    fn negative_keeps_sign() {
        assert_eq!(parse_amount("-4"), Some(-4.0));
    }

    #[test]
    fn leading_dot_and_trailing_dot() {
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount("5."), Some(5.0));
    }

    #[test]
    fn exponent_with_digits() {
        assert_eq!(parse_amount("1e3"), Some(1000.0));
    }

    #[test]
    fn dangling_exponent_is_ignored() {
        assert_eq!(parse_amount("2e"), Some(2.0));
        assert_eq!(parse_amount("2e+"), Some(2.0));
    }

    #[test]
    fn empty_is_none() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
    }

    #[test]
    fn non_numeric_is_none() {
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("$20"), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("."), None);
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!(parse_amount("1e999"), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
// TipOuts & display helpers
// ═══════════════════════════════════════════════════════════════════

mod tip_outs {
    use super::*;

    #[test]
    fn rates_are_fixed() {
        assert_eq!(TIP_PERCENTAGE_1, 0.055);
        assert_eq!(TIP_PERCENTAGE_2, 0.025);
    }

    #[test]
    fn from_sales_200() {
        let t = TipOuts::from_sales(200.0);
        assert!(approx(t.tip1, 11.0));
        assert!(approx(t.tip2, 5.0));
        assert!(approx(t.total(), 16.0));
    }

    #[test]
    fn zero_constant() {
        assert_eq!(TipOuts::ZERO, TipOuts::default());
        assert_eq!(TipOuts::ZERO.tip1, 0.0);
        assert_eq!(TipOuts::ZERO.tip2, 0.0);
    }

    #[test]
    fn format_amount_two_decimals() {
        assert_eq!(format_amount("$", 11.000000000000002), "$11.00");
        assert_eq!(format_amount("$", 50.75), "$50.75");
        assert_eq!(format_amount("€", 0.0), "€0.00");
    }

    #[test]
    fn rate_labels() {
        assert_eq!(rate_label(TIP_PERCENTAGE_1), "5.5%");
        assert_eq!(rate_label(TIP_PERCENTAGE_2), "2.5%");
    }
}

// ═══════════════════════════════════════════════════════════════════
// YearMonth
// ═══════════════════════════════════════════════════════════════════

mod year_month {
    use super::*;

    #[test]
    fn new_rejects_invalid_month() {
        assert!(YearMonth::new(2024, 0).is_err());
        assert!(YearMonth::new(2024, 13).is_err());
    }

    #[test]
    fn from_date_drops_day() {
        let m = YearMonth::from_date(d(2024, 7, 28));
        assert_eq!(m.year(), 2024);
        assert_eq!(m.month(), 7);
        assert_eq!(m.first_day(), d(2024, 7, 1));
    }

    #[test]
    fn next_from_december_wraps_year() {
        let m = ym(2024, 12).next();
        assert_eq!(m, ym(2025, 1));
    }

    #[test]
    fn prev_from_january_wraps_year() {
        assert_eq!(ym(2025, 1).prev(), ym(2024, 12));
    }

    #[test]
    fn next_then_prev_is_identity() {
        let m = ym(2023, 5);
        assert_eq!(m.next().prev(), m);
    }

    #[test]
    fn days_in_month() {
        assert_eq!(ym(2024, 2).days_in_month(), 29);
        assert_eq!(ym(2023, 2).days_in_month(), 28);
        assert_eq!(ym(2024, 4).days_in_month(), 30);
        assert_eq!(ym(2024, 12).days_in_month(), 31);
    }

    #[test]
    fn last_day() {
        assert_eq!(ym(2024, 2).last_day(), d(2024, 2, 29));
        assert_eq!(ym(2024, 7).last_day(), d(2024, 7, 31));
    }

    #[test]
    fn contains() {
        let m = ym(2024, 7);
        assert!(m.contains(d(2024, 7, 1)));
        assert!(m.contains(d(2024, 7, 31)));
        assert!(!m.contains(d(2024, 8, 1)));
        assert!(!m.contains(d(2023, 7, 15)));
    }

    #[test]
    fn display() {
        assert_eq!(ym(2024, 7).to_string(), "July 2024");
        assert_eq!(ym(2025, 1).name(), "January");
    }

    #[test]
    fn ordering() {
        assert!(ym(2024, 12) < ym(2025, 1));
        assert!(ym(2024, 2) > ym(2024, 1));
    }
}

// ═══════════════════════════════════════════════════════════════════
// DailyTips
// ═══════════════════════════════════════════════════════════════════

mod daily_tips {
    use super::*;

    #[test]
    fn date_key_is_iso_date() {
        assert_eq!(date_key(d(2024, 7, 28)), "2024-07-28");
        assert_eq!(date_key(d(2024, 1, 5)), "2024-01-05");
    }

    #[test]
    fn parse_date_key_roundtrip() {
        assert_eq!(parse_date_key("2024-07-28").unwrap(), d(2024, 7, 28));
    }

    #[test]
    fn parse_date_key_rejects_garbage() {
        assert!(parse_date_key("2024-13-01").is_err());
        assert!(parse_date_key("yesterday").is_err());
    }

    #[test]
    fn set_then_get() {
        let mut tips = DailyTips::new();
        tips.set(d(2024, 7, 28), 25.0);
        assert_eq!(tips.get(d(2024, 7, 28)), Some(25.0));
    }

    #[test]
    fn set_zero_removes() {
        let mut tips = DailyTips::new();
        tips.set(d(2024, 7, 28), 0.0);
        assert_eq!(tips.get(d(2024, 7, 28)), None);
        assert!(tips.is_empty());
    }

    #[test]
    fn set_then_zero_clears() {
        let mut tips = DailyTips::new();
        tips.set(d(2024, 7, 28), 25.0);
        let prev = tips.set(d(2024, 7, 28), 0.0);
        assert_eq!(prev, Some(25.0));
        assert_eq!(tips.get(d(2024, 7, 28)), None);
    }

    #[test]
    fn negative_and_nan_remove() {
        let mut tips = DailyTips::new();
        tips.set(d(2024, 7, 1), 10.0);
        tips.set(d(2024, 7, 1), -5.0);
        assert!(!tips.contains(d(2024, 7, 1)));

        tips.set(d(2024, 7, 2), 10.0);
        tips.set(d(2024, 7, 2), f64::NAN);
        assert!(!tips.contains(d(2024, 7, 2)));
    }

    #[test]
    fn write_replaces_not_accumulates() {
        let mut tips = DailyTips::new();
        tips.set(d(2024, 7, 28), 25.0);
        tips.set(d(2024, 7, 28), 40.0);
        assert_eq!(tips.get(d(2024, 7, 28)), Some(40.0));
        assert_eq!(tips.len(), 1);
    }

    #[test]
    fn clear_returns_previous() {
        let mut tips = DailyTips::new();
        tips.set(d(2024, 7, 28), 25.0);
        assert_eq!(tips.clear(d(2024, 7, 28)), Some(25.0));
        assert_eq!(tips.clear(d(2024, 7, 28)), None);
    }

    #[test]
    fn in_month_filters_and_orders() {
        let mut tips = DailyTips::new();
        tips.set(d(2024, 6, 30), 1.0);
        tips.set(d(2024, 7, 31), 3.0);
        tips.set(d(2024, 7, 1), 2.0);
        tips.set(d(2024, 8, 1), 4.0);

        let july: Vec<_> = tips.in_month(ym(2024, 7)).collect();
        assert_eq!(july, vec![(d(2024, 7, 1), 2.0), (d(2024, 7, 31), 3.0)]);
    }
}

// ═══════════════════════════════════════════════════════════════════
// CalculationRecord & CalculationLog
// ═══════════════════════════════════════════════════════════════════

mod calculation_record {
    use super::*;

    fn at(y: i32, m: u32, day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn new_computes_tip_outs() {
        let r = CalculationRecord::new(200.0, 15.0, at(2024, 7, 28));
        assert_eq!(r.sales, 200.0);
        assert!(approx(r.tip_out_1, 11.0));
        assert!(approx(r.tip_out_2, 5.0));
        assert_eq!(r.take_home_tip, 15.0);
        assert_eq!(r.timestamp, at(2024, 7, 28));
    }

    #[test]
    fn ids_are_unique() {
        let a = CalculationRecord::new(10.0, 1.0, at(2024, 7, 1));
        let b = CalculationRecord::new(10.0, 1.0, at(2024, 7, 1));
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let r = CalculationRecord::new(200.0, 15.0, at(2024, 7, 28));
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("tipOut1").is_some());
        assert!(json.get("tipOut2").is_some());
        assert!(json.get("takeHomeTip").is_some());
        assert!(json.get("timestamp").is_some());
        assert!(json.get("tip_out_1").is_none());
    }

    #[test]
    fn deserializes_browser_iso_timestamp_and_opaque_id() {
        let json = r#"{
            "id": "2024-07-28T21:04:11.512Zk3j9x2a",
            "sales": 120.5,
            "tipOut1": 6.6275,
            "tipOut2": 3.0125,
            "takeHomeTip": 20,
            "timestamp": "2024-07-28T21:04:11.512Z"
        }"#;
        let r: CalculationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, "2024-07-28T21:04:11.512Zk3j9x2a");
        assert_eq!(r.take_home_tip, 20.0);
        assert_eq!(r.month_in(&Utc), ym(2024, 7));
    }

    #[test]
    fn month_depends_on_time_zone() {
        let r = CalculationRecord::new(
            10.0,
            0.0,
            Utc.with_ymd_and_hms(2024, 8, 1, 2, 0, 0).unwrap(),
        );
        let new_york = chrono::FixedOffset::west_opt(4 * 3600).unwrap();
        assert_eq!(r.month_in(&Utc), ym(2024, 8));
        assert_eq!(r.month_in(&new_york), ym(2024, 7));
    }

    #[test]
    fn log_keeps_insertion_order() {
        let mut log = CalculationLog::new();
        let late = CalculationRecord::new(1.0, 0.0, at(2024, 9, 1));
        let early = CalculationRecord::new(2.0, 0.0, at(2024, 1, 1));
        log.append(late.clone());
        log.append(early.clone());
        assert_eq!(log.records(), &[late, early]);
    }

    #[test]
    fn log_get_by_id() {
        let mut log = CalculationLog::new();
        let r = CalculationRecord::new(1.0, 0.0, at(2024, 9, 1));
        log.append(r.clone());
        assert_eq!(log.get(&r.id), Some(&r));
        assert_eq!(log.get("missing"), None);
    }

    #[test]
    fn log_in_month() {
        let mut log = CalculationLog::new();
        log.append(CalculationRecord::new(1.0, 0.0, at(2024, 7, 1)));
        log.append(CalculationRecord::new(2.0, 0.0, at(2024, 8, 1)));
        log.append(CalculationRecord::new(3.0, 0.0, at(2024, 7, 31)));

        let sales: Vec<f64> = log.in_month(ym(2024, 7), &Utc).map(|r| r.sales).collect();
        assert_eq!(sales, vec![1.0, 3.0]);
    }

    #[test]
    fn log_serializes_as_plain_array() {
        let mut log = CalculationLog::new();
        log.append(CalculationRecord::new(1.0, 0.0, at(2024, 7, 1)));
        let json = serde_json::to_value(&log).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 1);
    }
}

// ═══════════════════════════════════════════════════════════════════
// CalendarNavigator
// ═══════════════════════════════════════════════════════════════════

mod calendar_navigator {
    use super::*;

    #[test]
    fn starts_without_selection() {
        let nav = CalendarNavigator::new(ym(2024, 7));
        assert_eq!(nav.displayed(), ym(2024, 7));
        assert_eq!(nav.selected(), None);
        assert!(!nav.has_selection());
    }

    #[test]
    fn select_replaces_previous() {
        let mut nav = CalendarNavigator::new(ym(2024, 7));
        nav.select_date(d(2024, 7, 3));
        nav.select_date(d(2024, 7, 9));
        assert_eq!(nav.selected(), Some(d(2024, 7, 9)));
    }

    #[test]
    fn navigation_keeps_selection() {
        let mut nav = CalendarNavigator::new(ym(2024, 7));
        nav.select_date(d(2024, 7, 3));
        nav.next_month();
        nav.next_month();
        assert_eq!(nav.displayed(), ym(2024, 9));
        assert_eq!(nav.selected(), Some(d(2024, 7, 3)));
    }

    #[test]
    fn next_month_from_december() {
        let mut nav = CalendarNavigator::new(ym(2024, 12));
        nav.next_month();
        assert_eq!(nav.displayed(), ym(2025, 1));
    }

    #[test]
    fn prev_month_from_january() {
        let mut nav = CalendarNavigator::new(ym(2025, 1));
        nav.prev_month();
        assert_eq!(nav.displayed(), ym(2024, 12));
    }

    #[test]
    fn show_month_jumps() {
        let mut nav = CalendarNavigator::new(ym(2025, 1));
        nav.show_month(ym(2020, 2));
        assert_eq!(nav.displayed(), ym(2020, 2));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Form, editor & settings
// ═══════════════════════════════════════════════════════════════════

mod form_and_settings {
    use super::*;

    #[test]
    fn sales_form_clear() {
        let mut form = SalesForm {
            sales_input: "200".into(),
            take_home_input: "15".into(),
        };
        form.clear();
        assert_eq!(form, SalesForm::default());
    }

    #[test]
    fn tip_editor_titles() {
        let mut editor = TipEditor {
            date: d(2024, 7, 28),
            input: String::new(),
            is_edit: false,
        };
        assert_eq!(editor.title(), "Add Tip");
        editor.is_edit = true;
        assert_eq!(editor.title(), "Edit Tip");
    }

    #[test]
    fn default_settings() {
        let s = Settings::default();
        assert_eq!(s.currency_symbol, "$");
        assert_eq!(s.daily_tips_key, "tipAppDailyTips");
        assert_eq!(s.calculation_records_key, "tipAppCalculationRecords");
    }

    #[test]
    fn settings_serde_roundtrip() {
        let s = Settings {
            currency_symbol: "£".into(),
            ..Settings::default()
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
