//! HTTP handlers for the sales reports

use axum::{extract::Query, extract::State, Json};

use crate::error::AppResult;
use crate::services::currentday::{CurrentDayService, DiscountQuery, RemainingItem};
use crate::services::dataview::TableQuery;
use crate::services::sales::{SalesDetailsReport, SalesService, SalesTrendPoint};
use crate::AppState;

/// Daily sales trend, ascending by date
pub async fn sales_trend(State(state): State<AppState>) -> AppResult<Json<Vec<SalesTrendPoint>>> {
    let service = SalesService::new(state.store.clone());
    Ok(Json(service.trend()?))
}

/// Per-item sales details with table page and quantity series
pub async fn sales_details(
    State(state): State<AppState>,
    Query(query): Query<TableQuery>,
) -> AppResult<Json<SalesDetailsReport>> {
    let service = SalesService::new(state.store.clone());
    Ok(Json(service.details(&query)?))
}

/// Remaining stock for today with clearance pricing
pub async fn current_day_sales(
    State(state): State<AppState>,
    Query(query): Query<DiscountQuery>,
) -> AppResult<Json<Vec<RemainingItem>>> {
    let service = CurrentDayService::new(state.store.clone());
    Ok(Json(service.report(&query)?))
}
