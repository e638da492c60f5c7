//! DTOs for bookmark endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::entities::Bookmark;

/// Request body for `POST /bookmarks`.
///
/// `link` and `favorites` are kept as raw JSON so that wrong types are reported
/// with validation codes rather than extractor rejections.
#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub link: Option<Value>,
    pub description: Option<String>,
    pub favorites: Option<Value>,
}

/// Request body for `PATCH /bookmarks/{guid}`.
///
/// All fields are optional; only provided fields are changed.
///
/// # `description` semantics
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the description
/// - **String** → set new description
#[derive(Debug, Deserialize)]
pub struct UpdateBookmarkRequest {
    pub link: Option<Value>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    pub favorites: Option<Value>,
}

/// Public JSON representation of a bookmark.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub guid: Uuid,
    pub link: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    pub description: Option<String>,
    pub favorites: bool,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(b: Bookmark) -> Self {
        Self {
            guid: b.guid,
            link: b.link,
            created_at: b.created_at,
            description: b.description,
            favorites: b.favorites,
        }
    }
}

/// Response of `GET /bookmarks`.
#[derive(Debug, Serialize)]
pub struct ListBookmarksResponse {
    /// Total number of records matching the filter, ignoring pagination.
    pub length: i64,
    pub data: Vec<BookmarkResponse>,
}

/// Summary returned after creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBookmark {
    pub guid: Uuid,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    pub favorites: bool,
}

/// Envelope for single-record responses.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_description_absent_null_and_set() {
        let absent: UpdateBookmarkRequest = serde_json::from_value(json!({})).unwrap();
        assert!(absent.description.is_none());

        let cleared: UpdateBookmarkRequest =
            serde_json::from_value(json!({ "description": null })).unwrap();
        assert_eq!(cleared.description, Some(None));

        let set: UpdateBookmarkRequest =
            serde_json::from_value(json!({ "description": "docs" })).unwrap();
        assert_eq!(set.description, Some(Some("docs".to_string())));
    }

    #[test]
    fn test_null_favorites_counts_as_absent() {
        let req: CreateBookmarkRequest =
            serde_json::from_value(json!({ "link": "https://ya.ru", "favorites": null })).unwrap();
        assert!(req.favorites.is_none());
    }

    #[test]
    fn test_bookmark_response_wire_names() {
        let created_at = DateTime::from_timestamp_millis(1_571_161_876_951).unwrap();
        let guid = Uuid::new_v4();
        let body = serde_json::to_value(BookmarkResponse {
            guid,
            link: "https://ya.ru".to_string(),
            created_at,
            description: None,
            favorites: false,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "guid": guid.to_string(),
                "link": "https://ya.ru",
                "createdAt": 1_571_161_876_951_i64,
                "description": null,
                "favorites": false
            })
        );
    }
}
