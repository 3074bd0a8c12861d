//! ZeroBite Restaurant Operations Dashboard - Backend Server
//!
//! Report views over the restaurant's flat JSON documents: inventory,
//! menu, sales, leftovers, weather, social trends and demand prediction,
//! each built by one generic filter/paginate/aggregate engine.

use axum::Router;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod store;

pub use config::Config;

use store::DataStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: DataStore,
    pub config: Arc<Config>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::report_routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
