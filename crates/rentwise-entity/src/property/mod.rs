//! Property domain entities.

pub mod filter;
pub mod model;
pub mod property_type;

pub use filter::PropertyFilter;
pub use model::{Property, PropertyRow};
pub use property_type::PropertyType;
