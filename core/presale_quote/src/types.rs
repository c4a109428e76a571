//! # Types
//!
//! Shared data structures used across the quote and guard modules.
//!
//! ## Design decisions
//!
//! ### Parameters / State split
//!
//! A presale is described by two values with very different lifetimes:
//!
//! - [`PresaleParameters`] — loaded once from configuration and validated at
//!   construction; never mutated afterwards.
//! - [`PresaleState`] — a read-only snapshot of the on-chain flags, refreshed by
//!   the caller (periodically or after a confirmed contribution).
//!
//! Neither the quote nor the guard keeps any of these between calls.
//!
//! ### Reasons as data
//!
//! [`GuardReason`] carries every outcome of the contribution guard, including
//! the ones a user hits while still typing. The checks run in a fixed order so
//! the most actionable reason is reported first:
//!
//! ```text
//! EmergencyStopped ──► PresaleInactive ──► EmptyInput ──► NotANumber
//!     ──► BelowMinimum ──► AboveMaximum ──► None (allowed)
//! ```

use serde::Serialize;

use crate::errors::ConfigError;

/// Immutable configuration of one presale instance.
///
/// Fields are private so that a value of this type always satisfies
/// `rate > 0`, `0 <= tax_percentage < 100` and
/// `0 < min_contribution <= max_contribution`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PresaleParameters {
    rate: f64,
    tax_percentage: f64,
    min_contribution: f64,
    max_contribution: f64,
    token_label: String,
}

impl PresaleParameters {
    /// Validate and build the parameters.
    ///
    /// # Arguments
    ///
    /// * `rate` - Token units granted per unit of contributed currency
    /// * `tax_percentage` - Percentage of the gross token amount withheld
    /// * `min_contribution` - Smallest accepted contribution (inclusive)
    /// * `max_contribution` - Largest accepted contribution (inclusive)
    /// * `token_label` - Label appended to display text, e.g. `DOGECAT`
    pub fn new(
        rate: f64,
        tax_percentage: f64,
        min_contribution: f64,
        max_contribution: f64,
        token_label: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(ConfigError::InvalidRate(rate));
        }

        if !(0.0..100.0).contains(&tax_percentage) {
            return Err(ConfigError::TaxOutOfRange(tax_percentage));
        }

        require_positive("minimum contribution", min_contribution)?;
        require_positive("maximum contribution", max_contribution)?;

        if min_contribution > max_contribution {
            return Err(ConfigError::MinAboveMax {
                min: min_contribution,
                max: max_contribution,
            });
        }

        let token_label = token_label.into().trim().to_string();
        if token_label.is_empty() {
            return Err(ConfigError::EmptyTokenLabel);
        }

        Ok(Self {
            rate,
            tax_percentage,
            min_contribution,
            max_contribution,
            token_label,
        })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn tax_percentage(&self) -> f64 {
        self.tax_percentage
    }

    pub fn min_contribution(&self) -> f64 {
        self.min_contribution
    }

    pub fn max_contribution(&self) -> f64 {
        self.max_contribution
    }

    pub fn token_label(&self) -> &str {
        &self.token_label
    }
}

/// Reject zero, negative and non-finite values for `field`.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Snapshot of the presale's administrative flags.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PresaleState {
    /// Contributions are currently accepted.
    pub active: bool,
    /// Administrative pause, independent of `active`.
    pub emergency_stopped: bool,
}

impl PresaleState {
    /// An open presale with no emergency stop.
    pub fn open() -> Self {
        Self {
            active: true,
            emergency_stopped: false,
        }
    }
}

/// Token amounts derived from one input value.
///
/// Recomputed on every input change; nothing here is persisted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContributionQuote {
    /// The text exactly as typed.
    pub raw_input: String,
    /// `None` when the text is empty or not yet a valid amount.
    pub parsed_amount: Option<f64>,
    pub gross_tokens: f64,
    pub tax_tokens: f64,
    /// Unrounded amount credited to the contributor.
    pub net_tokens: f64,
    /// Rounded, human-readable rendering of `net_tokens` with the token label.
    /// Lossy; never parse it back.
    pub display_text: String,
}

/// Outcome of the contribution guard.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardReason {
    /// Nothing blocks the contribution.
    None,
    EmptyInput,
    NotANumber,
    BelowMinimum,
    AboveMaximum,
    PresaleInactive,
    EmergencyStopped,
}

impl GuardReason {
    /// Return a short identifier string, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::EmptyInput => "empty_input",
            Self::NotANumber => "not_a_number",
            Self::BelowMinimum => "below_minimum",
            Self::AboveMaximum => "above_maximum",
            Self::PresaleInactive => "presale_inactive",
            Self::EmergencyStopped => "emergency_stopped",
        }
    }
}

/// Whether the submit action is enabled, and why not when it is not.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct GuardResult {
    pub allowed: bool,
    pub reason: GuardReason,
}

impl GuardResult {
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            reason: GuardReason::None,
        }
    }

    pub fn blocked(reason: GuardReason) -> Self {
        debug_assert_ne!(reason, GuardReason::None);
        Self {
            allowed: false,
            reason,
        }
    }
}
