//! Business logic services for the application layer.

pub mod bookmark_service;

pub use bookmark_service::{BookmarkChanges, BookmarkService};
