//! # Quote
//!
//! Turns the contribution field's text into the token amount the contributor
//! would receive.
//!
//! ```text
//! gross = amount * rate
//! tax   = gross * tax_percentage / 100
//! net   = gross - tax
//! ```
//!
//! Empty or not-yet-valid text is the field's rest state, not a failure: the
//! quote is zero and displays as `"0 <LABEL>"`. An amount so large that the
//! token maths leaves `f64` range gets the same rest quote.

use crate::amount::parse_amount;
use crate::format::format_tokens;
use crate::types::{ContributionQuote, PresaleParameters};

/// Compute the quote for `raw_input` under `params`.
///
/// Pure: the same arguments always give the same quote, so it is safe to call
/// on every keystroke.
pub fn quote(raw_input: &str, params: &PresaleParameters) -> ContributionQuote {
    let Some(amount) = parse_amount(raw_input) else {
        return rest_quote(raw_input, params);
    };

    let gross_tokens = amount * params.rate();
    let tax_tokens = gross_tokens * params.tax_percentage() / 100.0;
    let net_tokens = gross_tokens - tax_tokens;
    if !(gross_tokens.is_finite() && net_tokens.is_finite()) {
        return rest_quote(raw_input, params);
    }
    debug_assert!(
        net_tokens >= 0.0,
        "negative net tokens ({net_tokens}) for amount {amount}"
    );

    ContributionQuote {
        raw_input: raw_input.to_string(),
        parsed_amount: Some(amount),
        gross_tokens,
        tax_tokens,
        net_tokens,
        display_text: display_text(net_tokens, params.token_label()),
    }
}

fn rest_quote(raw_input: &str, params: &PresaleParameters) -> ContributionQuote {
    ContributionQuote {
        raw_input: raw_input.to_string(),
        parsed_amount: None,
        gross_tokens: 0.0,
        tax_tokens: 0.0,
        net_tokens: 0.0,
        display_text: display_text(0.0, params.token_label()),
    }
}

fn display_text(net_tokens: f64, token_label: &str) -> String {
    format!("{} {token_label}", format_tokens(net_tokens))
}
