//! HTTP handlers for test-data generation

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::testdata::{GenerateDataInput, GenerateDataSummary, TestDataService};
use crate::AppState;

/// Regenerate the inventory, menu, sales and leftover documents
pub async fn generate_test_data(
    State(state): State<AppState>,
    Json(input): Json<GenerateDataInput>,
) -> AppResult<Json<GenerateDataSummary>> {
    let service = TestDataService::new(state.store.clone());
    Ok(Json(service.generate(&input)?))
}
