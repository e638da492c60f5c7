//! HTTP request handlers for API endpoints.

pub mod bookmarks;
pub mod health;

pub use bookmarks::{
    create_bookmark_handler, delete_bookmark_handler, get_bookmark_handler,
    list_bookmarks_handler, missing_guid_handler, update_bookmark_handler,
};
pub use health::health_handler;
