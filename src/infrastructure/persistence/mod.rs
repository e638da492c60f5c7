//! Bookmark repository implementations.
//!
//! # Repositories
//!
//! - [`PgBookmarkRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryBookmarkRepository`] - Process-local fallback store

pub mod memory_bookmark_repository;
pub mod pg_bookmark_repository;

pub use memory_bookmark_repository::InMemoryBookmarkRepository;
pub use pg_bookmark_repository::PgBookmarkRepository;
