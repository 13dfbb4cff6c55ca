//! Defaults Route
//!
//! - GET /api/v1/defaults - Initial values for every dashboard input

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::config::DashboardDefaults;

/// GET /api/v1/defaults
pub async fn get_defaults(State(state): State<Arc<AppState>>) -> Json<DashboardDefaults> {
    Json(state.defaults.as_ref().clone())
}
