//! # rentwise-database
//!
//! PostgreSQL connection management, the property search compiler, and
//! the concrete property repository.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod search;

pub use connection::DatabasePool;
pub use repositories::PropertyRepository;
pub use search::{InMemoryPropertySource, PropertySource, SearchCompiler, SearchParams, SearchQuery};
