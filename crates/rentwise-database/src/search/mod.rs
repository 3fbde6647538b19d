//! Property search: query-string parsing, predicate compilation, and
//! rendering.
//!
//! A request flows through three stages:
//!
//! 1. [`SearchParams`] parses raw query-string values into a typed
//!    [`PropertyFilter`](rentwise_entity::property::PropertyFilter),
//!    rejecting malformed input before anything touches the store.
//! 2. [`SearchCompiler`] turns the filter into a [`SearchQuery`], a flat
//!    AND-list of [`Predicate`]s.
//! 3. A [`PropertySource`] executes the query: the Postgres repository
//!    renders it to parameterized SQL via [`render`], the in-memory source
//!    evaluates the predicates directly.

pub mod compiler;
pub mod memory;
pub mod params;
pub mod predicate;
pub mod render;
pub mod source;

pub use compiler::{SearchCompiler, SearchQuery};
pub use memory::InMemoryPropertySource;
pub use params::SearchParams;
pub use predicate::Predicate;
pub use render::{BindValue, RenderedQuery, render};
pub use source::PropertySource;
