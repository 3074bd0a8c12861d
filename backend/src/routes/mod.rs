//! Route definitions for the ZeroBite Restaurant Operations Dashboard
//!
//! Each report mounts at its fixed path; the root path redirects to the
//! inventory view.

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create the report routes
pub fn report_routes() -> Router<AppState> {
    Router::new()
        // Root redirects to the inventory view
        .route("/", get(redirect_to_inventory))
        // Health check
        .route("/health", get(handlers::health_check))
        // Table views
        .route("/inventory", get(handlers::inventory_report))
        .route("/menu", get(handlers::menu_report))
        .route("/leftover", get(handlers::leftover_report))
        // Sales views
        .route("/sales", get(handlers::sales_trend))
        .route("/salesdetails", get(handlers::sales_details))
        .route("/currentday", get(handlers::current_day_sales))
        // Self-generating documents
        .route("/weather", get(handlers::weather_forecast))
        .route("/weather/generate", post(handlers::generate_weather))
        .route("/trends", get(handlers::social_trends))
        .route("/trends/generate", post(handlers::generate_trends))
        // Forecast and tooling
        .route("/prediction", get(handlers::demand_forecast))
        .route("/testdata", post(handlers::generate_test_data))
}

async fn redirect_to_inventory() -> Redirect {
    Redirect::temporary("/inventory")
}
