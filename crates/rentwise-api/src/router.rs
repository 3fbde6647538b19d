//! Route definitions for the Rentwise HTTP API.
//!
//! All routes are mounted under `/api`.

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the API router and thread `state` through every route.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(property_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Property search and lookup
fn property_routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(handlers::property::search_properties))
        .route("/properties/{id}", get(handlers::property::get_property))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
