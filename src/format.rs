//! # format
//!
//! Display formatting shared by alert messages and the view builders.
//! Grouping follows the en-US convention (`1,234,567.89`).

use num_format::{Locale, ToFormattedString};

/// Groups thousands and keeps up to three fraction digits, dropping trailing
/// zeros: `120000 → "120,000"`, `1.5 → "1.5"`, `0.1234 → "0.123"`.
pub fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac.trim_end_matches('0');

    let mut out = group_digits(whole);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.insert(0, '-');
    }
    out
}

/// Inserts en-US separators into a run of ASCII digits. Values past `u128`
/// are grouped by hand so nothing saturates.
fn group_digits(digits: &str) -> String {
    if let Ok(n) = digits.parse::<u128>() {
        return n.to_formatted_string(&Locale::en);
    }
    let separator = Locale::en.separator();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Dollar amount for the panels.
///
/// With `abbreviated`, large values collapse to one decimal with a `K`/`M`/`B`
/// suffix. Otherwise values of at least one dollar get cents and grouping,
/// and sub-dollar prices get six decimals.
pub fn format_currency(value: f64, abbreviated: bool) -> String {
    if abbreviated && value >= 1e9 {
        format!("${:.1}B", value / 1e9)
    } else if abbreviated && value >= 1e6 {
        format!("${:.1}M", value / 1e6)
    } else if abbreviated && value >= 1e3 {
        format!("${:.1}K", value / 1e3)
    } else if value >= 1.0 {
        let fixed = format!("{value:.2}");
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        format!("${}.{cents}", group_digits(whole))
    } else {
        format!("${value:.6}")
    }
}

/// Signed percentage with two decimals: `+1.80%`, `-2.30%`.
pub fn format_percentage(value: f64) -> String {
    // -0.0 renders as "+0.00%"
    let value = if value == 0.0 { 0.0 } else { value };
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(120_000.0), "120,000");
        assert_eq!(group_thousands(1_234_567.5), "1,234,567.5");
        assert_eq!(group_thousands(1.45), "1.45");
        assert_eq!(group_thousands(100.0), "100");
        assert_eq!(group_thousands(0.125), "0.125");
        assert_eq!(group_thousands(0.1234), "0.123");
        assert_eq!(group_thousands(-2_500.25), "-2,500.25");
    }

    #[test]
    fn grouping_past_integer_range() {
        assert_eq!(group_thousands(1e17), "100,000,000,000,000,000");
        assert_eq!(group_thousands(1e20), "100,000,000,000,000,000,000");
        assert_eq!(group_thousands(18_446_744_073_709_551_616.0), "18,446,744,073,709,551,616");
        // 2^130 is past u128::MAX and exactly representable
        assert_eq!(
            group_thousands(2f64.powi(130)),
            "1,361,129,467,683,753,853,853,498,429,727,072,845,824"
        );
        assert_eq!(group_thousands(-1e20), "-100,000,000,000,000,000,000");
        assert_eq!(group_thousands(-0.0001), "0");
    }

    #[test]
    fn currency_past_integer_range() {
        assert_eq!(format_currency(1e17, false), "$100,000,000,000,000,000.00");
        assert_eq!(format_currency(1e20, false), "$100,000,000,000,000,000,000.00");
    }

    #[test]
    fn currency_plain() {
        assert_eq!(format_currency(116_750.0, false), "$116,750.00");
        assert_eq!(format_currency(4_150.456, false), "$4,150.46");
        assert_eq!(format_currency(1.45, false), "$1.45");
        assert_eq!(format_currency(0.5, false), "$0.500000");
    }

    #[test]
    fn currency_abbreviated() {
        assert_eq!(format_currency(3_100_000_000_000.0, true), "$3100.0B");
        assert_eq!(format_currency(28_500_000_000.0, true), "$28.5B");
        assert_eq!(format_currency(890_000_000.0, true), "$890.0M");
        assert_eq!(format_currency(45_600.0, true), "$45.6K");
        assert_eq!(format_currency(12.0, true), "$12.00");
    }

    #[test]
    fn percentages() {
        assert_eq!(format_percentage(1.8), "+1.80%");
        assert_eq!(format_percentage(-2.3), "-2.30%");
        assert_eq!(format_percentage(0.0), "+0.00%");
        assert_eq!(format_percentage(-0.0), "+0.00%");
    }
}
