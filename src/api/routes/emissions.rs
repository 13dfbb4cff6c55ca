//! Emissions Route
//!
//! - GET /api/v1/emissions - Token and dollar emission series

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{EmissionsInputs, EmissionsQuery, ProjectionResponse};
use crate::api::error::ApiResult;
use crate::api::extract::ApiQuery;
use crate::api::state::AppState;
use crate::calculator::EmissionsProjection;

/// GET /api/v1/emissions
///
/// Recomputes the emission schedule and its dollar adjustment.
pub async fn get_emissions(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<EmissionsQuery>,
) -> ApiResult<Json<ProjectionResponse<EmissionsInputs, EmissionsProjection>>> {
    let inputs = query.resolve(&state.defaults);
    let projection = compute(&state, &inputs)?;

    Ok(Json(ProjectionResponse { inputs, projection }))
}

pub(crate) fn compute(state: &AppState, inputs: &EmissionsInputs) -> ApiResult<EmissionsProjection> {
    state.check_horizon(inputs.schedule.horizon)?;
    Ok(EmissionsProjection::compute(
        &inputs.schedule,
        inputs.token_price,
        inputs.redemption_rate,
    )?)
}
