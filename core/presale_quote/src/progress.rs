//! Raise progress against the presale's soft and hard caps.

use serde::Serialize;

use crate::errors::ConfigError;
use crate::types::require_positive;

/// Fundraising targets, in the contribution currency.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RaiseTargets {
    soft_cap: f64,
    hard_cap: f64,
}

impl RaiseTargets {
    /// Validate and build the targets; both caps must be positive and
    /// `soft_cap <= hard_cap`.
    pub fn new(soft_cap: f64, hard_cap: f64) -> Result<Self, ConfigError> {
        require_positive("soft cap", soft_cap)?;
        require_positive("hard cap", hard_cap)?;

        if soft_cap > hard_cap {
            return Err(ConfigError::SoftCapAboveHardCap { soft_cap, hard_cap });
        }

        Ok(Self { soft_cap, hard_cap })
    }

    pub fn soft_cap(&self) -> f64 {
        self.soft_cap
    }

    pub fn hard_cap(&self) -> f64 {
        self.hard_cap
    }
}

/// Where the raise currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RaiseProgress {
    pub total_raised: f64,
    /// Share of the hard cap raised, clamped to `[0, 100]`.
    pub percent: f64,
    pub soft_cap_reached: bool,
    pub hard_cap_reached: bool,
}

/// Compute progress for `total_raised`. Negative or non-finite totals count
/// as nothing raised.
pub fn progress(total_raised: f64, targets: &RaiseTargets) -> RaiseProgress {
    let total_raised = if total_raised.is_finite() && total_raised > 0.0 {
        total_raised
    } else {
        0.0
    };

    let percent = (total_raised / targets.hard_cap * 100.0).clamp(0.0, 100.0);

    RaiseProgress {
        total_raised,
        percent,
        soft_cap_reached: total_raised >= targets.soft_cap,
        hard_cap_reached: total_raised >= targets.hard_cap,
    }
}
