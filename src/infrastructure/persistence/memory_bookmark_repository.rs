//! In-process bookmark store.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::{Bookmark, BookmarkPatch, NewBookmark};
use crate::domain::query::{BookmarkField, BookmarkPage, BookmarkQuery, SortDirection};
use crate::domain::repositories::BookmarkRepository;
use crate::error::AppError;

/// A bookmark repository backed by a `HashMap`.
///
/// Used when no database is configured, and by integration tests. Data lives
/// only as long as the process.
///
/// # Use Cases
///
/// - Development without PostgreSQL
/// - HTTP tests that exercise the full router without a live database
pub struct InMemoryBookmarkRepository {
    bookmarks: RwLock<HashMap<Uuid, Bookmark>>,
}

impl InMemoryBookmarkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory bookmark store");
        Self {
            bookmarks: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBookmarkRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn compare_by(field: BookmarkField, a: &Bookmark, b: &Bookmark) -> Ordering {
    match field {
        BookmarkField::CreatedAt => a.created_at.cmp(&b.created_at),
        BookmarkField::Favorites => a.favorites.cmp(&b.favorites),
    }
}

#[async_trait]
impl BookmarkRepository for InMemoryBookmarkRepository {
    async fn create(&self, new_bookmark: NewBookmark) -> Result<Bookmark, AppError> {
        let bookmark: Bookmark = new_bookmark.into();
        self.bookmarks
            .write()
            .await
            .insert(bookmark.guid, bookmark.clone());
        Ok(bookmark)
    }

    async fn find_by_id(&self, guid: Uuid) -> Result<Option<Bookmark>, AppError> {
        Ok(self.bookmarks.read().await.get(&guid).cloned())
    }

    async fn update(&self, guid: Uuid, patch: BookmarkPatch) -> Result<(), AppError> {
        if let Some(bookmark) = self.bookmarks.write().await.get_mut(&guid) {
            bookmark.apply(patch);
        }
        Ok(())
    }

    async fn delete(&self, guid: Uuid) -> Result<(), AppError> {
        self.bookmarks.write().await.remove(&guid);
        Ok(())
    }

    async fn find_and_count(&self, query: &BookmarkQuery) -> Result<BookmarkPage, AppError> {
        let guard = self.bookmarks.read().await;

        let mut matching: Vec<&Bookmark> = guard
            .values()
            .filter(|b| query.filter.as_ref().is_none_or(|f| f.matches(b)))
            .collect();

        matching.sort_by(|a, b| {
            let primary = match query.order.direction {
                SortDirection::Asc => compare_by(query.order.field, a, b),
                SortDirection::Desc => compare_by(query.order.field, b, a),
            };
            primary.then_with(|| a.guid.cmp(&b.guid))
        });

        let offset = usize::try_from(query.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit).unwrap_or(usize::MAX);

        Ok(BookmarkPage {
            count: matching.len() as i64,
            rows: matching
                .into_iter()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect(),
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
