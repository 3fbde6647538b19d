//! # rentwise-service
//!
//! Business logic service layer for Rentwise. Services receive their
//! dependencies at construction time as `Arc` references and never touch
//! HTTP types.

pub mod property;

pub use property::PropertyService;
