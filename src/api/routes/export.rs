//! Export Routes
//!
//! Projection export for spreadsheets and offline analysis.
//!
//! - GET /api/v1/export - Export a projection as CSV, JSON or NDJSON

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::{EmissionsQuery, ExportParams, PresaleQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::api::extract::ApiQuery;
use crate::api::routes::{emissions, presale};
use crate::api::state::AppState;
use crate::report::{Report, ReportFormat, ReportKind};

/// GET /api/v1/export
///
/// The report's own query parameters (`token_price`, `horizon`, ...) are
/// read from the same query string.
pub async fn export_data(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<ExportParams>,
    ApiQuery(emissions_query): ApiQuery<EmissionsQuery>,
    ApiQuery(presale_query): ApiQuery<PresaleQuery>,
) -> ApiResult<Response> {
    if !state.config.enable_export {
        return Err(ApiError::Validation(
            "Export feature is disabled".to_string(),
        ));
    }

    let kind = ReportKind::parse(&params.report).ok_or_else(|| {
        ApiError::Validation(format!(
            "Unknown report '{}', expected emissions or presale",
            params.report
        ))
    })?;
    let format = ReportFormat::parse(&params.format).ok_or_else(|| {
        ApiError::Validation(format!(
            "Unknown format '{}', expected csv, json or ndjson",
            params.format
        ))
    })?;

    let report = match kind {
        ReportKind::Emissions => {
            let inputs = emissions_query.resolve(&state.defaults);
            Report::from_emissions(&emissions::compute(&state, &inputs)?)
        }
        ReportKind::Presale => {
            let inputs = presale_query.resolve(&state.defaults);
            Report::from_presale(&presale::compute(&state, &inputs)?)
        }
    };

    let body = report
        .render(format)
        .map_err(|e| ApiError::Internal(format!("Failed to render report: {}", e)))?;

    let filename = format!(
        "solve3_{}_{}.{}",
        kind,
        Utc::now().format("%Y%m%d_%H%M%S"),
        format.extension()
    );

    tracing::info!(report = %kind, rows = report.rows.len(), "Exported projection");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        Body::from(body),
    )
        .into_response())
}
