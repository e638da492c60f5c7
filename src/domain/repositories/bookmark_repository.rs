//! Repository trait for bookmark data access.

use crate::domain::entities::{Bookmark, BookmarkPatch, NewBookmark};
use crate::domain::query::{BookmarkPage, BookmarkQuery};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for storing bookmarks.
///
/// This is the whole persistence surface the service relies on; handlers and
/// the query translator never talk to storage directly.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookmarkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryBookmarkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Persists a new bookmark and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_bookmark: NewBookmark) -> Result<Bookmark, AppError>;

    /// Finds a bookmark by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Bookmark))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, guid: Uuid) -> Result<Option<Bookmark>, AppError>;

    /// Applies a partial update. Missing rows are ignored.
    async fn update(&self, guid: Uuid, patch: BookmarkPatch) -> Result<(), AppError>;

    /// Removes a bookmark. Missing rows are ignored.
    async fn delete(&self, guid: Uuid) -> Result<(), AppError>;

    /// Counts all matches of `query` and returns the requested page of them.
    async fn find_and_count(&self, query: &BookmarkQuery) -> Result<BookmarkPage, AppError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;

    /// Short name of the storage backend, for health reporting.
    fn backend(&self) -> &'static str;
}
