//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.

pub mod bookmark_repository;

pub use bookmark_repository::BookmarkRepository;

#[cfg(test)]
pub use bookmark_repository::MockBookmarkRepository;
