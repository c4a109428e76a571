//! Axum REST API handlers.
//!
//! The service keeps no presale state of its own: the on-chain flags arrive
//! with each `/guard` request and the raised total with each `/progress`
//! request, exactly as the caller last read them.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use presale_quote::{
    evaluate, format_fixed, parse_amount, progress, quote, to_base_units, AmountError,
    ContributionQuote, GuardResult, PresaleParameters, PresaleState, RaiseProgress, RaiseTargets,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::{ApiError, Result};

#[derive(Debug, Clone)]
pub struct ApiState {
    pub params: PresaleParameters,
    pub targets: RaiseTargets,
    pub currency_decimals: u32,
}

impl ApiState {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(ApiState {
            params: config.presale_parameters()?,
            targets: config.raise_targets()?,
            currency_decimals: config.currency_decimals,
        })
    }
}

// ─────────────────────────────────────────────────────────
// Request shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct QuoteQuery {
    #[serde(default)]
    pub amount: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct GuardQuery {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub emergency_stopped: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProgressQuery {
    #[serde(default)]
    pub total_raised: String,
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ParamsResponse {
    pub params: PresaleParameters,
    pub targets: RaiseTargets,
    pub currency_decimals: u32,
    pub rate_display: String,
    pub min_contribution_display: String,
    pub max_contribution_display: String,
}

#[derive(Serialize)]
pub struct GuardResponse {
    #[serde(flatten)]
    pub result: GuardResult,
    /// Exact amount to submit, in currency base units; only when allowed.
    pub value_base_units: Option<String>,
}

#[derive(Serialize)]
pub struct ProgressResponse {
    #[serde(flatten)]
    pub progress: RaiseProgress,
    pub raised_display: String,
    pub soft_cap_display: String,
    pub hard_cap_display: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /params`
///
/// Returns the configured presale parameters and raise targets.
pub async fn get_params(State(state): State<Arc<ApiState>>) -> Json<ParamsResponse> {
    Json(ParamsResponse {
        params: state.params.clone(),
        targets: state.targets,
        currency_decimals: state.currency_decimals,
        rate_display: format_fixed(state.params.rate(), 0),
        min_contribution_display: format_fixed(state.params.min_contribution(), 2),
        max_contribution_display: format_fixed(state.params.max_contribution(), 2),
    })
}

/// `GET /quote?amount=`
///
/// Returns the token quote for the typed amount. Never fails: unusable text
/// quotes as zero.
pub async fn get_quote(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<QuoteQuery>,
) -> Json<ContributionQuote> {
    let q = quote(&query.amount, &state.params);
    debug!(amount = %query.amount, net_tokens = q.net_tokens, "quoted contribution");
    Json(q)
}

/// `GET /guard?amount=&active=&emergency_stopped=`
///
/// Returns whether the amount may be contributed under the supplied presale
/// flags, with the exact base-unit value to submit when it may.
pub async fn get_guard(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<GuardQuery>,
) -> Response {
    let presale_state = PresaleState {
        active: query.active,
        emergency_stopped: query.emergency_stopped,
    };
    let result = evaluate(&query.amount, &state.params, presale_state);
    debug!(amount = %query.amount, reason = result.reason.as_str(), "evaluated contribution");

    let value_base_units = if result.allowed {
        match to_base_units(&query.amount, state.currency_decimals) {
            Ok(units) => Some(units.to_string()),
            Err(e) => {
                warn!(amount = %query.amount, "allowed amount has no exact base-unit value: {e}");
                return bad_request(e.into());
            }
        }
    } else {
        None
    };

    Json(GuardResponse {
        result,
        value_base_units,
    })
    .into_response()
}

/// `GET /progress?total_raised=`
///
/// Returns raise progress for the supplied total, in currency units.
pub async fn get_progress(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ProgressQuery>,
) -> Response {
    let Some(total_raised) = parse_amount(&query.total_raised) else {
        return bad_request(AmountError::Invalid(query.total_raised).into());
    };

    let p = progress(total_raised, &state.targets);
    Json(ProgressResponse {
        progress: p,
        raised_display: format_fixed(p.total_raised, 2),
        soft_cap_display: format_fixed(state.targets.soft_cap(), 2),
        hard_cap_display: format_fixed(state.targets.hard_cap(), 2),
    })
    .into_response()
}
