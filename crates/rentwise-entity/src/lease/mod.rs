//! Lease domain entities.

pub mod model;

pub use model::Lease;
