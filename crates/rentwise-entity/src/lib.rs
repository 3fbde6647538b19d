//! # rentwise-entity
//!
//! Domain entity models for Rentwise. Every struct in this crate
//! represents a database table row, a projected query row, or a domain
//! value object. Database entities derive `sqlx::FromRow`.

pub mod lease;
pub mod location;
pub mod property;
