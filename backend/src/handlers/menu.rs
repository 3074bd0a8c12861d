//! HTTP handlers for the menu report

use axum::{extract::Query, extract::State, Json};

use crate::error::AppResult;
use crate::services::dataview::TableQuery;
use crate::services::menu::{MenuReport, MenuService};
use crate::AppState;

/// Menu table, filtered and paged
pub async fn menu_report(
    State(state): State<AppState>,
    Query(query): Query<TableQuery>,
) -> AppResult<Json<MenuReport>> {
    let service = MenuService::new(state.store.clone());
    Ok(Json(service.report(&query)?))
}
