//! HTTP handlers for the social trends report

use axum::{extract::State, Json};

use shared::models::TrendRecord;

use crate::error::AppResult;
use crate::services::trends::TrendsService;
use crate::AppState;

/// Current trend scores, regenerated if the document is missing
pub async fn social_trends(State(state): State<AppState>) -> AppResult<Json<Vec<TrendRecord>>> {
    let service = TrendsService::new(state.store.clone());
    Ok(Json(service.report()?))
}

/// Force fresh trend scores for every menu item
pub async fn generate_trends(State(state): State<AppState>) -> AppResult<Json<Vec<TrendRecord>>> {
    let service = TrendsService::new(state.store.clone());
    Ok(Json(service.regenerate()?))
}
