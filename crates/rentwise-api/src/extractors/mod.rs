//! Request parsing helpers.

pub mod path;
pub mod query;

pub use path::parse_id;
pub use query::query_rejection;
