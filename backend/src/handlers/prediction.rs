//! HTTP handlers for the demand forecast

use axum::{extract::Query, extract::State, Json};

use shared::models::DemandForecast;

use crate::error::AppResult;
use crate::services::prediction::{ForecastQuery, PredictionService};
use crate::AppState;

/// Demand forecast for the next `days` days (default 7, max 14)
pub async fn demand_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<Vec<DemandForecast>>> {
    let service = PredictionService::new(state.store.clone());
    Ok(Json(service.forecast(&query)?))
}
