//! # rentwise-core
//!
//! Core crate for Rentwise. Contains configuration schemas, geographic
//! primitives, query-string parsing helpers, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Rentwise crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
