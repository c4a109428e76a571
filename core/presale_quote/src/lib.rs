//! # Presale Quote
//!
//! Pure business logic behind a token presale contribution form:
//!
//! | Concern      | Entry Point(s)                                   |
//! |--------------|--------------------------------------------------|
//! | Configuration| [`PresaleParameters::new`], [`RaiseTargets::new`] |
//! | Quoting      | [`quote`]                                        |
//! | Gating       | [`evaluate`]                                     |
//! | Submission   | [`to_base_units`], [`format_base_units`]         |
//! | Statistics   | [`progress`], [`format_fixed`]                   |
//!
//! ## Architecture
//!
//! Every entry point is a synchronous function of its arguments. Nothing
//! here performs I/O, keeps state between calls or touches shared mutable
//! data, so any of it can be called from any thread, on every keystroke.
//! Wallet connection, contract calls and transaction submission belong to
//! the caller.
//!
//! Quotes are computed in `f64`. The amount actually submitted should come
//! from [`to_base_units`] on the original text, not from a quote.

pub mod amount;
pub mod errors;
pub mod format;
pub mod guard;
pub mod progress;
pub mod quote;
mod types;

#[cfg(test)]
mod test_quote;

pub use amount::{classify, format_base_units, parse_amount, to_base_units, AmountInput};
pub use errors::{AmountError, ConfigError};
pub use format::{format_fixed, format_tokens};
pub use guard::evaluate;
pub use progress::{progress, RaiseProgress, RaiseTargets};
pub use quote::quote;
pub use types::{ContributionQuote, GuardReason, GuardResult, PresaleParameters, PresaleState};
