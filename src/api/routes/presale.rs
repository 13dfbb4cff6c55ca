//! Presale Route
//!
//! - GET /api/v1/presale - Weekly and cumulative presale earnings

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{PresaleInputs, PresaleQuery, ProjectionResponse};
use crate::api::error::ApiResult;
use crate::api::extract::ApiQuery;
use crate::api::state::AppState;
use crate::calculator::PresaleProjection;

/// GET /api/v1/presale
///
/// Projects presale earnings over the emission horizon.
pub async fn get_presale(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<PresaleQuery>,
) -> ApiResult<Json<ProjectionResponse<PresaleInputs, PresaleProjection>>> {
    let inputs = query.resolve(&state.defaults);
    let projection = compute(&state, &inputs)?;

    Ok(Json(ProjectionResponse { inputs, projection }))
}

pub(crate) fn compute(state: &AppState, inputs: &PresaleInputs) -> ApiResult<PresaleProjection> {
    state.check_horizon(inputs.schedule.horizon)?;
    Ok(PresaleProjection::compute(&inputs.schedule, &inputs.presale)?)
}
