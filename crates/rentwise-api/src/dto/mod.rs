//! Response payloads that are not entities.

pub mod response;

pub use response::HealthResponse;
