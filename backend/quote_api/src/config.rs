//! Application configuration loaded from environment variables.

use std::str::FromStr;

use presale_quote::{PresaleParameters, RaiseTargets};

use crate::errors::{ApiError, Result};

/// Largest decimal count whose scale still fits in a `u128`.
const MAX_CURRENCY_DECIMALS: u32 = 38;

#[derive(Debug, Clone)]
pub struct Config {
    /// Label shown after token amounts (e.g. DOGECAT)
    pub token_label: String,
    /// Tokens granted per unit of contributed currency
    pub rate: f64,
    /// Percentage of gross tokens withheld as tax
    pub tax_percentage: f64,
    /// Smallest accepted contribution, in currency units
    pub min_contribution: f64,
    /// Largest accepted contribution, in currency units
    pub max_contribution: f64,
    /// Raise soft cap, in currency units
    pub soft_cap: f64,
    /// Raise hard cap, in currency units
    pub hard_cap: f64,
    /// Decimals of the currency's base unit (18 for ETH / wei)
    pub currency_decimals: u32,
    /// Port for the REST API server
    pub api_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup, falling back to
    /// the DOGECAT presale defaults for anything unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let currency_decimals = parse_or(&lookup, "CURRENCY_DECIMALS", 18u32)?;
        if currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(ApiError::Config(format!(
                "CURRENCY_DECIMALS must be at most {MAX_CURRENCY_DECIMALS}"
            )));
        }

        Ok(Config {
            token_label: lookup("TOKEN_LABEL").unwrap_or_else(|| "DOGECAT".to_string()),
            rate: parse_or(&lookup, "PRESALE_RATE", 1000.0)?,
            tax_percentage: parse_or(&lookup, "TAX_PERCENTAGE", 3.0)?,
            min_contribution: parse_or(&lookup, "MIN_CONTRIBUTION", 0.0166)?,
            max_contribution: parse_or(&lookup, "MAX_CONTRIBUTION", 0.166)?,
            soft_cap: parse_or(&lookup, "SOFT_CAP", 3.0)?,
            hard_cap: parse_or(&lookup, "HARD_CAP", 10.0)?,
            currency_decimals,
            api_port: parse_or(&lookup, "API_PORT", 3001u16)?,
        })
    }

    /// Validated presale parameters; a misconfigured presale is an error,
    /// never clamped.
    pub fn presale_parameters(&self) -> Result<PresaleParameters> {
        Ok(PresaleParameters::new(
            self.rate,
            self.tax_percentage,
            self.min_contribution,
            self.max_contribution,
            self.token_label.as_str(),
        )?)
    }

    pub fn raise_targets(&self) -> Result<RaiseTargets> {
        Ok(RaiseTargets::new(self.soft_cap, self.hard_cap)?)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ApiError::Config(format!("Invalid {key}: {raw:?}"))),
        None => Ok(default),
    }
}
