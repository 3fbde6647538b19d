//! Property listing services: search, lookup, and store health.

pub mod service;

pub use service::PropertyService;
