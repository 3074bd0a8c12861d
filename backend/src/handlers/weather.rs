//! HTTP handlers for the weather forecast

use axum::{extract::State, Json};

use shared::models::WeatherRecord;

use crate::error::AppResult;
use crate::services::weather::WeatherService;
use crate::AppState;

/// Current 14-day forecast, regenerated if the document is missing
pub async fn weather_forecast(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<WeatherRecord>>> {
    let service = WeatherService::new(state.store.clone());
    Ok(Json(service.forecast()?))
}

/// Force a fresh synthetic forecast
pub async fn generate_weather(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<WeatherRecord>>> {
    let service = WeatherService::new(state.store.clone());
    Ok(Json(service.regenerate()?))
}
