use serde::{Deserialize, Serialize};

/// Primary tip-out rate (5.5% of sales).
pub const TIP_PERCENTAGE_1: f64 = 0.055;

/// Secondary tip-out rate (2.5% of sales).
pub const TIP_PERCENTAGE_2: f64 = 0.025;

/// The two tip-out deductions derived from a sales figure.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TipOuts {
    /// `sales × TIP_PERCENTAGE_1`
    pub tip1: f64,
    /// `sales × TIP_PERCENTAGE_2`
    pub tip2: f64,
}

impl TipOuts {
    /// Neutral display state used whenever the sales input is not usable.
    pub const ZERO: TipOuts = TipOuts { tip1: 0.0, tip2: 0.0 };

    pub fn from_sales(sales: f64) -> Self {
        Self {
            tip1: sales * TIP_PERCENTAGE_1,
            tip2: sales * TIP_PERCENTAGE_2,
        }
    }

    /// Combined deduction of both tip-outs.
    pub fn total(&self) -> f64 {
        self.tip1 + self.tip2
    }
}

/// Parse free-text money input the way a browser number field reads it.
///
/// Leading whitespace is skipped and the longest valid decimal prefix is
/// used, so `"12abc"` reads as 12 and `"  7.5"` as 7.5. Returns `None` when no
/// digits lead the text or the value is not finite. The sign is kept; callers
/// decide whether negatives are acceptable.
pub fn parse_amount(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when it carries digits ("1e" reads as 1)
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format an amount with two decimals behind the currency symbol, e.g. `$11.00`.
pub fn format_amount(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}

/// Percentage label for a rate with one decimal, e.g. `0.055` → `5.5%`.
pub fn rate_label(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
