//! Pure display derivations. Nothing here holds state.

use breakdowns_api::types::{Content, QuickMetric};
use serde::Serialize;

/// How many quick metrics the stat grid surfaces.
pub const QUICK_METRICS_SHOWN: usize = 2;

/// Severity band for an upside percentage, strongest first.
///
/// Thresholds are strict, so a value sitting exactly on a boundary falls into
/// the lower band. See [`UpsideBand::classify`] for the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsideBand {
    Strong = 1,
    Positive = 2,
    Flat = 3,
    Negative = 4,
}

impl UpsideBand {
    /// | upside            | band     |
    /// |-------------------|----------|
    /// | `> 20`            | Strong   |
    /// | `> 0`, `<= 20`    | Positive |
    /// | `> -10`, `<= 0`   | Flat     |
    /// | `<= -10`, or NaN  | Negative |
    pub fn classify(upside_pct: f64) -> Self {
        if upside_pct > 20.0 {
            UpsideBand::Strong
        } else if upside_pct > 0.0 {
            UpsideBand::Positive
        } else if upside_pct > -10.0 {
            UpsideBand::Flat
        } else {
            UpsideBand::Negative
        }
    }

    /// 1 (strongest) through 4 (weakest).
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UpsideBand::Strong => "strong",
            UpsideBand::Positive => "positive",
            UpsideBand::Flat => "flat",
            UpsideBand::Negative => "negative",
        }
    }
}

impl std::fmt::Display for UpsideBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The first two quick metrics, or none when the post has no such list.
pub fn quick_metrics_preview(content: &Content) -> &[QuickMetric] {
    match &content.quick_metrics {
        Some(metrics) => &metrics[..metrics.len().min(QUICK_METRICS_SHOWN)],
        None => &[],
    }
}

/// Digits inspected past the requested precision to tell an exact midpoint
/// from a value that only rounds to one.
const MIDPOINT_DIGITS: usize = 24;

/// Fixed-point text with `decimals` fraction digits.
///
/// Exact midpoints round away from zero (`1.125` → `1.13`), where `{:.N}`
/// would round them to even. Values that only look like midpoints, such as
/// `1.005` (stored as `1.00499…`), round down as usual.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{:.*}", decimals, value);
    }
    let wide = format!("{:.*}", decimals + MIDPOINT_DIGITS, value);
    let (kept, rest) = wide.split_at(wide.len() - MIDPOINT_DIGITS);
    let midpoint = rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0');
    if midpoint {
        bump_last_digit(kept.trim_end_matches('.'))
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Adds one unit in the last place to the magnitude of a fixed-point string.
fn bump_last_digit(fixed: &str) -> String {
    let mut chars: Vec<char> = fixed.chars().collect();
    for i in (0..chars.len()).rev() {
        match chars[i] {
            '9' => chars[i] = '0',
            c @ '0'..='8' => {
                chars[i] = (c as u8 + 1) as char;
                return chars.into_iter().collect();
            }
            _ => {}
        }
    }
    // carried out of the leading digit: 9.95 -> 10.0
    let at = usize::from(chars.first() == Some(&'-'));
    chars.insert(at, '1');
    chars.into_iter().collect()
}

/// Per-share amounts are shown in pounds with two decimals.
pub fn format_price(value: f64) -> String {
    format!("£{}", to_fixed(value, 2))
}

pub fn format_pct(value: f64) -> String {
    format!("{}%", to_fixed(value, 1))
}

/// Peer multiple as written, suffixed with `x`: `19` → `19x`, `24.5` → `24.5x`.
pub fn format_multiple(value: f64) -> String {
    format!("{}x", value)
}

/// Thousands-grouped number with at most three fraction digits,
/// e.g. `3400000` → `3,400,000` and `1250.4` → `1,250.4`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = to_fixed(value.abs(), 3);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}
