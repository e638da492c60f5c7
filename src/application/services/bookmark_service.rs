//! Bookmark CRUD and listing service.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Bookmark, BookmarkPatch, NewBookmark, now_millis};
use crate::domain::query::{BookmarkPage, BookmarkQuery};
use crate::domain::repositories::BookmarkRepository;
use crate::error::AppError;

const NOT_FOUND_MESSAGE: &str = "No bookmark with this id";

/// Fields a client may change on an existing bookmark.
#[derive(Debug, Clone, Default)]
pub struct BookmarkChanges {
    pub link: Option<String>,
    pub description: Option<Option<String>>,
    pub favorites: Option<bool>,
}

/// Service for creating, reading, updating and deleting bookmarks.
///
/// Inputs are expected to be validated by the HTTP layer. Every operation
/// performs at most one lookup and one write; there is no locking between
/// concurrent requests on the same id.
pub struct BookmarkService {
    repository: Arc<dyn BookmarkRepository>,
}

impl BookmarkService {
    /// Creates a new bookmark service.
    pub fn new(repository: Arc<dyn BookmarkRepository>) -> Self {
        Self { repository }
    }

    /// Stores a bookmark with a server-generated id and creation time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(
        &self,
        link: String,
        description: Option<String>,
        favorites: bool,
    ) -> Result<Bookmark, AppError> {
        let new_bookmark = NewBookmark {
            guid: Uuid::new_v4(),
            link,
            created_at: now_millis(),
            description,
            favorites,
        };

        let bookmark = self.repository.create(new_bookmark).await?;

        metrics::counter!("bookmarks_created_total").increment(1);
        tracing::info!(guid = %bookmark.guid, link = %bookmark.link, "Bookmark created");

        Ok(bookmark)
    }

    /// Retrieves a bookmark by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no bookmark has this id.
    pub async fn get(&self, guid: Uuid) -> Result<Bookmark, AppError> {
        self.repository
            .find_by_id(guid)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))
    }

    /// Applies a partial update and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no bookmark has this id.
    pub async fn update(&self, guid: Uuid, changes: BookmarkChanges) -> Result<(), AppError> {
        self.get(guid).await?;

        let patch = BookmarkPatch {
            link: changes.link,
            description: changes.description,
            favorites: changes.favorites,
            updated_at: now_millis(),
        };

        self.repository.update(guid, patch).await?;

        metrics::counter!("bookmarks_updated_total").increment(1);
        tracing::info!(%guid, "Bookmark updated");

        Ok(())
    }

    /// Deletes a bookmark.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no bookmark has this id.
    pub async fn delete(&self, guid: Uuid) -> Result<(), AppError> {
        self.get(guid).await?;
        self.repository.delete(guid).await?;

        metrics::counter!("bookmarks_deleted_total").increment(1);
        tracing::info!(%guid, "Bookmark deleted");

        Ok(())
    }

    /// Executes a list query.
    pub async fn list(&self, query: &BookmarkQuery) -> Result<BookmarkPage, AppError> {
        tracing::debug!(?query, "Listing bookmarks");
        self.repository.find_and_count(query).await
    }

    /// Returns true if the store answers a ping.
    pub async fn health_check(&self) -> bool {
        match self.repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Storage health check failed");
                false
            }
        }
    }

    /// Name of the storage backend.
    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }
}
