//! Core type definitions used across the Rentwise workspace.

pub mod geo;
pub mod wire;

pub use geo::GeoPoint;
