//! Bookmark API route configuration.

use crate::api::handlers::{
    create_bookmark_handler, delete_bookmark_handler, get_bookmark_handler,
    list_bookmarks_handler, missing_guid_handler, update_bookmark_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Bookmark CRUD routes.
///
/// # Endpoints
///
/// - `GET    /bookmarks`          - List with filtering, sorting and pagination
/// - `POST   /bookmarks`          - Create a bookmark
/// - `PATCH  /bookmarks`          - Always 400 `GUID_IS_UNDEFINED`
/// - `GET    /bookmarks/{guid}`   - Fetch one bookmark
/// - `PATCH  /bookmarks/{guid}`   - Partially update a bookmark
/// - `DELETE /bookmarks/{guid}`   - Delete a bookmark
pub fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bookmarks",
            get(list_bookmarks_handler)
                .post(create_bookmark_handler)
                .patch(missing_guid_handler),
        )
        .route(
            "/bookmarks/{guid}",
            get(get_bookmark_handler)
                .patch(update_bookmark_handler)
                .delete(delete_bookmark_handler),
        )
}
