//! Parsing of amount text as typed into the contribution field.
//!
//! Two readings of the same text are provided:
//!
//! - [`parse_amount`] — an `f64` used for quoting and bound checks.
//! - [`to_base_units`] — an exact integer in the currency's smallest unit,
//!   used for the value actually submitted, so rounding in the displayed
//!   quote never changes what gets settled.
//!
//! Accepted text is a plain decimal: digits with at most one `.`, and at least
//! one digit. `"1."` and `".5"` are accepted since they show up mid-typing.
//! Signs, exponents, separators, `inf` and `NaN` are rejected.

use crate::errors::AmountError;

/// Classification of raw field text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AmountInput {
    /// Nothing typed (whitespace only counts as nothing).
    Empty,
    /// Something typed that is not a non-negative plain decimal.
    Invalid,
    Valid(f64),
}

/// Classify `raw` as empty, invalid or a parsed amount.
pub fn classify(raw: &str) -> AmountInput {
    let text = raw.trim();
    if text.is_empty() {
        return AmountInput::Empty;
    }
    if !is_plain_decimal(text) {
        return AmountInput::Invalid;
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => AmountInput::Valid(value),
        _ => AmountInput::Invalid,
    }
}

/// Parse `raw` as a non-negative finite amount, or `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    match classify(raw) {
        AmountInput::Valid(value) => Some(value),
        AmountInput::Empty | AmountInput::Invalid => None,
    }
}

/// Convert `raw` into integer base units with `decimals` fractional digits.
///
/// `to_base_units("0.05", 18)` is `50_000_000_000_000_000`.
pub fn to_base_units(raw: &str, decimals: u32) -> Result<u128, AmountError> {
    let text = raw.trim();
    if !is_plain_decimal(text) {
        return Err(AmountError::Invalid(raw.to_string()));
    }

    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    if fraction.len() > decimals as usize {
        return Err(AmountError::TooPrecise {
            found: fraction.len(),
            max: decimals,
        });
    }

    let scale = 10u128.checked_pow(decimals).ok_or(AmountError::Overflow)?;
    let whole_units = parse_digits(whole)?
        .checked_mul(scale)
        .ok_or(AmountError::Overflow)?;

    // Right-pad the fraction to `decimals` digits.
    let fraction_scale = 10u128
        .checked_pow(decimals - fraction.len() as u32)
        .ok_or(AmountError::Overflow)?;
    let fraction_units = parse_digits(fraction)?
        .checked_mul(fraction_scale)
        .ok_or(AmountError::Overflow)?;

    whole_units
        .checked_add(fraction_units)
        .ok_or(AmountError::Overflow)
}

/// Render an integer base-unit amount as decimal text without trailing zeros.
///
/// `format_base_units(1_500_000_000_000_000_000, 18)` is `"1.5"`.
pub fn format_base_units(value: u128, decimals: u32) -> String {
    let digits = value.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let (whole, fraction) = if digits.len() > decimals {
        let (whole, fraction) = digits.split_at(digits.len() - decimals);
        (whole.to_string(), fraction.to_string())
    } else {
        ("0".to_string(), format!("{digits:0>decimals$}"))
    };

    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole
    } else {
        format!("{whole}.{fraction}")
    }
}

fn is_plain_decimal(text: &str) -> bool {
    let mut digits = 0usize;
    let mut dots = 0usize;
    for byte in text.bytes() {
        match byte {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

/// Parse an ASCII digit run already checked by [`is_plain_decimal`].
fn parse_digits(digits: &str) -> Result<u128, AmountError> {
    if digits.is_empty() {
        return Ok(0);
    }
    digits.parse::<u128>().map_err(|_| AmountError::Overflow)
}
