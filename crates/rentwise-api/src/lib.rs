//! # rentwise-api
//!
//! HTTP API layer for Rentwise built on Axum.
//!
//! Provides the property search, property lookup and health endpoints,
//! request logging and CORS middleware, and the mapping from [`AppError`]
//! to JSON error responses.
//!
//! [`AppError`]: rentwise_core::error::AppError

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use error::ApiError;
pub use state::AppState;
