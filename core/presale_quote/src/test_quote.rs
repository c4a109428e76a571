use crate::format::{format_fixed, format_tokens};
use crate::invariants::assert_all_quote_invariants;
use crate::quote::quote;
use crate::types::PresaleParameters;

fn dogecat() -> PresaleParameters {
    PresaleParameters::new(1000.0, 3.0, 0.0166, 0.166, "DOGECAT").unwrap()
}

#[test]
fn test_one_unit_quotes_net_of_tax() {
    let params = dogecat();
    let q = quote("1", &params);

    assert_eq!(q.parsed_amount, Some(1.0));
    assert_eq!(q.gross_tokens, 1000.0);
    assert_eq!(q.tax_tokens, 30.0);
    assert_eq!(q.net_tokens, 970.0);
    assert_eq!(q.display_text, "970 DOGECAT");
    assert_all_quote_invariants(&q, &params);
}

#[test]
fn test_empty_and_non_numeric_input_rest_at_zero() {
    let params = dogecat();
    for raw in ["", "   ", "abc", "-1", "1e3", "1,000", "0x10", "inf", "NaN", "1.2.3", "."] {
        let q = quote(raw, &params);
        assert_eq!(q.parsed_amount, None, "input {raw:?}");
        assert_eq!(q.net_tokens, 0.0, "input {raw:?}");
        assert_eq!(q.display_text, "0 DOGECAT", "input {raw:?}");
        assert_eq!(q.raw_input, raw);
        assert_all_quote_invariants(&q, &params);
    }
}

#[test]
fn test_partially_typed_decimals_are_quoted() {
    let params = dogecat();

    let trailing_dot = quote("1.", &params);
    assert_eq!(trailing_dot.net_tokens, 970.0);

    let leading_dot = quote(".5", &params);
    assert_eq!(leading_dot.parsed_amount, Some(0.5));
    assert_eq!(leading_dot.display_text, "485 DOGECAT");
}

#[test]
fn test_net_matches_formula_across_parameters() {
    let configs = [
        (1000.0, 3.0),
        (1.0, 0.0),
        (2_500_000.0, 12.5),
        (0.75, 99.9),
        (333.0, 50.0),
    ];
    let amounts = ["0", "0.0166", "0.1", "1", "3.14159", "42", "1000000"];

    for (rate, tax) in configs {
        let params = PresaleParameters::new(rate, tax, 0.01, 10.0, "TKN").unwrap();
        for raw in amounts {
            let q = quote(raw, &params);
            assert_all_quote_invariants(&q, &params);
        }
    }
}

#[test]
fn test_amounts_beyond_float_range_rest_at_zero() {
    let huge = format!("1{}", "0".repeat(306));
    let configs = [
        dogecat(),
        PresaleParameters::new(1000.0, 0.0, 0.0166, 0.166, "DOGECAT").unwrap(),
        PresaleParameters::new(f64::MAX, 3.0, 0.0166, 0.166, "DOGECAT").unwrap(),
    ];

    for params in configs {
        let q = quote(&huge, &params);
        assert_eq!(q.parsed_amount, None);
        assert_eq!(q.net_tokens, 0.0);
        assert_eq!(q.display_text, "0 DOGECAT");
        assert_all_quote_invariants(&q, &params);
    }

    // Still in range: a large amount under a modest rate is quoted normally.
    let q = quote("1000000000000", &dogecat());
    assert_eq!(q.display_text, "970,000,000,000,000 DOGECAT");
    assert_all_quote_invariants(&q, &dogecat());
}

#[test]
fn test_zero_tax_credits_gross() {
    let params = PresaleParameters::new(250.0, 0.0, 0.1, 1.0, "TKN").unwrap();
    let q = quote("2", &params);

    assert_eq!(q.tax_tokens, 0.0);
    assert_eq!(q.net_tokens, q.gross_tokens);
    assert_eq!(q.display_text, "500 TKN");
}

#[test]
fn test_net_tokens_strictly_increase_with_amount() {
    let params = dogecat();
    let amounts = ["0", "0.0001", "0.0166", "0.1", "0.166", "1", "1.5", "10", "12345.678"];

    let nets: Vec<f64> = amounts.iter().map(|a| quote(a, &params).net_tokens).collect();
    for pair in nets.windows(2) {
        assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
    }
}

#[test]
fn test_display_is_rounded_but_value_is_not() {
    let params = dogecat();
    let q = quote("0.0166", &params);

    // 0.0166 * 1000 * 0.97 = 16.102
    assert!((q.net_tokens - 16.102).abs() < 1e-9);
    assert_eq!(q.display_text, "16.1 DOGECAT");
}

#[test]
fn test_display_groups_thousands() {
    let params = dogecat();
    let q = quote("12345.678", &params);

    // 12345.678 * 970 = 11975307.66
    assert_eq!(q.display_text, "11,975,307.66 DOGECAT");
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let params = dogecat();
    let q = quote("  0.1 ", &params);

    assert_eq!(q.parsed_amount, Some(0.1));
    assert_eq!(q.raw_input, "  0.1 ");
    assert_eq!(q.display_text, "97 DOGECAT");
}

#[test]
fn test_quote_is_idempotent() {
    let params = dogecat();
    for raw in ["", "abc", "0.05", "1", "98765.4321"] {
        let first = quote(raw, &params);
        let second = quote(raw, &params);
        assert_eq!(first, second);
        assert_eq!(first.net_tokens.to_bits(), second.net_tokens.to_bits());
    }
}

#[test]
fn test_quote_serializes_for_the_ui() {
    let q = quote("1", &dogecat());
    let json = serde_json::to_value(&q).unwrap();

    assert_eq!(json["net_tokens"], 970.0);
    assert_eq!(json["display_text"], "970 DOGECAT");
    assert_eq!(json["parsed_amount"], 1.0);

    let rest = serde_json::to_value(quote("", &dogecat())).unwrap();
    assert!(rest["parsed_amount"].is_null());
}

#[test]
fn test_format_tokens() {
    assert_eq!(format_tokens(0.0), "0");
    assert_eq!(format_tokens(970.0), "970");
    assert_eq!(format_tokens(999.999), "1,000");
    assert_eq!(format_tokens(1234567.891), "1,234,567.89");
    assert_eq!(format_tokens(100.5), "100.5");
    assert_eq!(format_tokens(0.004), "0");
    assert_eq!(format_tokens(-0.001), "0");
    assert_eq!(format_tokens(-1500.25), "-1,500.25");
    assert_eq!(format_tokens(f64::NAN), "0");
}

#[test]
fn test_format_tokens_breaks_exact_ties_to_even() {
    // 0.125 and 0.375 are exact in binary; the tie goes to the even digit.
    assert_eq!(format_tokens(0.125), "0.12");
    assert_eq!(format_tokens(0.375), "0.38");
    assert_eq!(format_tokens(1234.625), "1,234.62");
    // Non-ties are unaffected.
    assert_eq!(format_tokens(0.126), "0.13");
}

#[test]
fn test_format_fixed() {
    assert_eq!(format_fixed(10.0, 2), "10.00");
    assert_eq!(format_fixed(0.0166, 2), "0.02");
    assert_eq!(format_fixed(1000.0, 0), "1000");
    assert_eq!(format_fixed(-0.0, 2), "0.00");
    assert_eq!(format_fixed(f64::INFINITY, 2), "0.00");
}
