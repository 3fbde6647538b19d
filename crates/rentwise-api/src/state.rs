//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use rentwise_core::config::AppConfig;
use rentwise_service::PropertyService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Property search and lookup
    pub property_service: Arc<PropertyService>,
}

impl AppState {
    /// Creates the state from its parts.
    pub fn new(config: AppConfig, property_service: PropertyService) -> Self {
        Self {
            config: Arc::new(config),
            property_service: Arc::new(property_service),
        }
    }
}
