use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use raidbots_client::ReportId;
use tracing::{debug, info};
use upgrade_engine::{
    Aggregation,
    gate::{self, Admission},
};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::reports::{report_query::ReportQuery, report_response::ReportView},
};

/// GET /reports/{report}?sort=dps|slot|boss
///
/// `report` is a report hash or an URL-encoded report page URL. The report is
/// downloaded once; later calls with a different `sort` re-rank the cached
/// aggregation.
///
/// # Example
/// ```bash
/// curl 'http://127.0.0.1:8080/reports/jxmyHRqGFghsshiFAeUXn8?sort=boss'
/// ```
pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(report): Path<String>,
    query: Result<Query<ReportQuery>, axum::extract::rejection::QueryRejection>,
) -> AppResult<Json<ApiResponse<ReportView>>> {
    let Query(query) = query.map_err(AppError::from)?;
    let sort = query.sort_mode()?;
    let id = ReportId::parse(&report)?;

    let aggregation = match state.reports.get(&id).await {
        Some(hit) => {
            debug!(report = %id, %sort, "report cache hit");
            hit
        }
        None => {
            let doc = state.raidbots.fetch_report(&id).await?;
            match gate::admit(doc)? {
                Admission::WrongReportType { sim_type } => {
                    return Ok(Json(ApiResponse::success(ReportView::wrong_report_type(
                        sim_type,
                    ))));
                }
                Admission::Accepted(report) => {
                    let aggregation = Arc::new(Aggregation::build(&report));
                    state.reports.insert(id.clone(), aggregation.clone()).await;
                    aggregation
                }
            }
        }
    };

    let page_url = state.raidbots.report_page_url(&id);
    let view = ReportView::ranked(Some((id.to_string(), page_url)), sort, &aggregation)?;
    info!(
        report = %id,
        %sort,
        winners = aggregation.winners().len(),
        skipped = aggregation.skipped(),
        "report ranked"
    );

    Ok(Json(ApiResponse::success(view)))
}
