//! POST /reports/analyze — runs the pipeline on an uploaded report document.

use axum::{Json, extract::Query};
use serde_json::Value;
use upgrade_engine::{
    Aggregation,
    gate::{self, Admission},
};

use crate::{
    core::http::response_envelope::ApiResponse,
    error_handler::{AppError, AppResult},
    routes::reports::{report_query::ReportQuery, report_response::ReportView},
};

/// Handler: POST /reports/analyze?sort=dps|slot|boss
///
/// The body is the report's `data.json`. Nothing is fetched or cached.
///
/// # Example
/// ```bash
/// curl -X POST 'http://127.0.0.1:8080/reports/analyze?sort=slot' \
///   -H 'content-type: application/json' \
///   --data-binary @data.json
/// ```
pub async fn analyze_report(
    query: Result<Query<ReportQuery>, axum::extract::rejection::QueryRejection>,
    Json(doc): Json<Value>,
) -> AppResult<Json<ApiResponse<ReportView>>> {
    let Query(query) = query.map_err(AppError::from)?;
    let sort = query.sort_mode()?;

    let view = match gate::admit(doc)? {
        Admission::WrongReportType { sim_type } => ReportView::wrong_report_type(sim_type),
        Admission::Accepted(report) => ReportView::ranked(None, sort, &Aggregation::build(&report))?,
    };

    Ok(Json(ApiResponse::success(view)))
}
