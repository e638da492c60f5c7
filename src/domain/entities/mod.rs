//! Core domain entities.
//!
//! Entities are plain data structures. Creation and partial updates use
//! dedicated input types:
//!
//! - [`Bookmark`] - A stored bookmark
//! - [`NewBookmark`] - Data for creating a bookmark
//! - [`BookmarkPatch`] - Partial update of an existing bookmark

pub mod bookmark;

pub use bookmark::{Bookmark, BookmarkPatch, NewBookmark, now_millis};
