//! HTTP handlers for the inventory report

use axum::{extract::Query, extract::State, Json};

use crate::error::AppResult;
use crate::services::dataview::TableQuery;
use crate::services::inventory::{InventoryReport, InventoryService};
use crate::AppState;

/// Inventory table, filtered and paged
pub async fn inventory_report(
    State(state): State<AppState>,
    Query(query): Query<TableQuery>,
) -> AppResult<Json<InventoryReport>> {
    let service = InventoryService::new(state.store.clone());
    Ok(Json(service.report(&query)?))
}
