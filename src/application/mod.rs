//! Application layer: services and query translation.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::BookmarkService`] - Bookmark CRUD and listing
//! - [`query_builder::build_query`] - List parameters to storage query

pub mod query_builder;
pub mod services;
