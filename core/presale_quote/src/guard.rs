//! # Guard
//!
//! Decides whether the contribute action is currently enabled.
//!
//! The checks run in a fixed order and the first failing one is reported:
//!
//! | Order | Condition                         | Reason             |
//! |-------|-----------------------------------|--------------------|
//! | 1     | emergency stop engaged            | `EmergencyStopped` |
//! | 2     | presale not active                | `PresaleInactive`  |
//! | 3     | field empty                       | `EmptyInput`       |
//! | 4     | not a non-negative decimal        | `NotANumber`       |
//! | 5     | amount `<` minimum contribution   | `BelowMinimum`     |
//! | 6     | amount `>` maximum contribution   | `AboveMaximum`     |
//!
//! Both bounds are inclusive.

use crate::amount::{classify, AmountInput};
use crate::types::{GuardReason, GuardResult, PresaleParameters, PresaleState};

/// Evaluate whether `raw_input` may be contributed right now.
pub fn evaluate(raw_input: &str, params: &PresaleParameters, state: PresaleState) -> GuardResult {
    if state.emergency_stopped {
        return GuardResult::blocked(GuardReason::EmergencyStopped);
    }

    if !state.active {
        return GuardResult::blocked(GuardReason::PresaleInactive);
    }

    let amount = match classify(raw_input) {
        AmountInput::Empty => return GuardResult::blocked(GuardReason::EmptyInput),
        AmountInput::Invalid => return GuardResult::blocked(GuardReason::NotANumber),
        AmountInput::Valid(amount) => amount,
    };

    if amount < params.min_contribution() {
        return GuardResult::blocked(GuardReason::BelowMinimum);
    }

    if amount > params.max_contribution() {
        return GuardResult::blocked(GuardReason::AboveMaximum);
    }

    GuardResult::allowed()
}
