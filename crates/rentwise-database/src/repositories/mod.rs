//! Repository implementations for Rentwise entities.

pub mod property;

pub use property::PropertyRepository;
