//! Number rendering for quotes and statistic panels.

/// Most fractional digits shown for a token amount.
pub const DISPLAY_FRACTION_DIGITS: usize = 2;

/// Format a token amount for display: `,` thousands separators, at most
/// [`DISPLAY_FRACTION_DIGITS`] fractional digits, trailing zeros dropped.
///
/// `1234567.891` renders as `"1,234,567.89"` and `970.0` as `"970"`.
/// Non-finite values render as `"0"`.
pub fn format_tokens(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let rounded = format!("{:.*}", DISPLAY_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + whole.len() / 3 + 1);
    // -0.001 rounds to zero and shows without a sign.
    if value < 0.0 && (whole != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Format `value` with exactly `decimals` fractional digits and no grouping,
/// e.g. `format_fixed(10.0, 2)` is `"10.00"`.
///
/// Non-finite values render as zero.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    };
    format!("{value:.decimals$}")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
