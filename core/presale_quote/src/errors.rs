//! Error types for presale configuration and exact amount conversion.
//!
//! Per-keystroke validation problems (empty field, bound violations, paused
//! presale) are *not* errors; they are reported as
//! [`GuardReason`](crate::GuardReason) values. The types here cover the two
//! cases that must fail loudly: a misconfigured presale and an amount that
//! cannot be represented exactly in base units.

use thiserror::Error;

/// A presale configuration that violates its invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("rate must be positive and finite, got {0}")]
    InvalidRate(f64),

    #[error("tax percentage must be within [0, 100), got {0}")]
    TaxOutOfRange(f64),

    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("minimum contribution {min} exceeds maximum contribution {max}")]
    MinAboveMax { min: f64, max: f64 },

    #[error("soft cap {soft_cap} exceeds hard cap {hard_cap}")]
    SoftCapAboveHardCap { soft_cap: f64, hard_cap: f64 },

    #[error("token label must not be empty")]
    EmptyTokenLabel,
}

/// Failure converting amount text into integer base units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("not a non-negative decimal amount: {0:?}")]
    Invalid(String),

    #[error("amount has {found} fractional digits, at most {max} allowed")]
    TooPrecise { found: usize, max: u32 },

    #[error("amount does not fit in base units")]
    Overflow,
}
