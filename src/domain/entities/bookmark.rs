//! Bookmark entity representing a saved link.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A saved link with its metadata.
///
/// `guid` is generated on creation and never changes. `updated_at` is refreshed
/// on every partial update.
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    pub guid: Uuid,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub description: Option<String>,
    pub favorites: bool,
}

impl Bookmark {
    /// Creates a new Bookmark instance.
    pub fn new(
        guid: Uuid,
        link: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        description: Option<String>,
        favorites: bool,
    ) -> Self {
        Self {
            guid,
            link,
            created_at,
            updated_at,
            description,
            favorites,
        }
    }

    /// Applies a partial update in place.
    pub fn apply(&mut self, patch: BookmarkPatch) {
        if let Some(link) = patch.link {
            self.link = link;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(favorites) = patch.favorites {
            self.favorites = favorites;
        }
        self.updated_at = patch.updated_at;
    }
}

/// Input data for creating a new bookmark.
///
/// Identifier and timestamps are assigned by the service, not the client.
#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub guid: Uuid,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub description: Option<String>,
    pub favorites: bool,
}

impl From<NewBookmark> for Bookmark {
    fn from(new: NewBookmark) -> Self {
        Bookmark::new(
            new.guid,
            new.link,
            new.created_at,
            new.created_at,
            new.description,
            new.favorites,
        )
    }
}

/// Partial update for an existing bookmark.
///
/// `None` fields are left unchanged.
/// `description: Some(None)` clears the description; `Some(Some(s))` sets it.
#[derive(Debug, Clone)]
pub struct BookmarkPatch {
    pub link: Option<String>,
    pub description: Option<Option<String>>,
    pub favorites: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

/// Returns the current time truncated to millisecond precision.
///
/// Timestamps travel as epoch milliseconds, so stored values must not carry
/// finer precision or exact-match filters would never hit.
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
