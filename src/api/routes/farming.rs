//! Farming Route
//!
//! - GET /api/v1/farming - Fee split, emission earnings and chart data

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{FarmingQuery, ProjectionResponse};
use crate::api::error::ApiResult;
use crate::api::extract::ApiQuery;
use crate::api::state::AppState;
use crate::calculator::{FarmingParams, FarmingProjection};

/// GET /api/v1/farming
pub async fn get_farming(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<FarmingQuery>,
) -> ApiResult<Json<ProjectionResponse<FarmingParams, FarmingProjection>>> {
    let inputs = query.resolve(&state.defaults);
    let projection = FarmingProjection::compute(&inputs)?;

    Ok(Json(ProjectionResponse { inputs, projection }))
}
