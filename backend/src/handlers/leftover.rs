//! HTTP handlers for the leftover report

use axum::{extract::Query, extract::State, Json};

use crate::error::AppResult;
use crate::services::dataview::TableQuery;
use crate::services::leftover::{LeftoverReport, LeftoverService};
use crate::AppState;

/// Leftover table with loss charts
pub async fn leftover_report(
    State(state): State<AppState>,
    Query(query): Query<TableQuery>,
) -> AppResult<Json<LeftoverReport>> {
    let service = LeftoverService::new(state.store.clone());
    Ok(Json(service.report(&query)?))
}
