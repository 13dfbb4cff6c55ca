//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::calculator::EmissionsProjection;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Ready once the configured defaults produce a valid projection.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if check_defaults(&state) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = if check_defaults(&state) {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// A misconfigured default would make every parameterless request fail
fn check_defaults(state: &AppState) -> bool {
    let defaults = &state.defaults;
    let result = EmissionsProjection::compute(
        &defaults.schedule,
        defaults.emissions.token_price,
        defaults.emissions.redemption_rate,
    )
    .and_then(|_| defaults.presale.validate())
    .and_then(|_| defaults.farming.validate());

    if let Err(e) = &result {
        tracing::warn!(error = %e, "Configured defaults are invalid");
    }
    result.is_ok()
}
