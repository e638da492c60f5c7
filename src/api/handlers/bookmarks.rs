//! Handlers for bookmark endpoints (list, create, get, update, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::dto::bookmark::{
    BookmarkResponse, CreateBookmarkRequest, CreatedBookmark, DataResponse, ListBookmarksResponse,
    MessageResponse, UpdateBookmarkRequest,
};
use crate::application::query_builder::build_query;
use crate::application::services::BookmarkChanges;
use crate::error::AppError;
use crate::state::AppState;
use crate::validation::constraints::{parse_bool, parse_uuid};
use crate::validation::{ErrorCode, ListParams};

const NOT_FOUND_MESSAGE: &str = "No bookmark with this id";

/// Lists bookmarks with optional filtering, sorting and pagination.
///
/// # Endpoint
///
/// `GET /bookmarks`
///
/// # Query Parameters
///
/// - `limit`, `offset`: non-negative integers (defaults 50 and 0)
/// - `sort_by`: `createdAt` or `favorites`
/// - `sort_dir`: `asc`/`ASC`/`desc`/`DESC`
/// - `filter`: field to filter on
/// - `filter_value`: exact match
/// - `filter_from`, `filter_to`: inclusive `createdAt` range in epoch milliseconds
///
/// # Response
///
/// ```json
/// {
///   "length": 2,
///   "data": [
///     {
///       "guid": "5b4e2a3c-...",
///       "link": "https://ya.ru",
///       "createdAt": 1571161876951,
///       "description": null,
///       "favorites": false
///     }
///   ]
/// }
/// ```
///
/// `length` is the total matching count, not the page size.
///
/// # Errors
///
/// Returns 400 with the first failed parameter check.
pub async fn list_bookmarks_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListBookmarksResponse>, AppError> {
    if let Some(first) = params.validate().into_iter().next() {
        return Err(first.into());
    }

    let query = build_query(&params)?;
    let page = state.bookmark_service.list(&query).await?;

    Ok(Json(ListBookmarksResponse {
        length: page.count,
        data: page.rows.into_iter().map(BookmarkResponse::from).collect(),
    }))
}

/// Creates a bookmark.
///
/// # Endpoint
///
/// `POST /bookmarks`
///
/// # Request Body
///
/// ```json
/// {
///   "link": "https://ya.ru",
///   "description": "search",   // optional
///   "favorites": true          // optional, bool or "true"/"false"
/// }
/// ```
///
/// # Errors
///
/// - `LINK_IS_UNDEFINED` when `link` is missing
/// - `BOOKMARKS_INVALID_LINK` / `BOOKMARKS_INVALID_DOMAIN` for a rejected link
/// - `BOOKMARKS_INVALID_FAVORITES` for a non-boolean `favorites`
pub async fn create_bookmark_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<DataResponse<CreatedBookmark>>), AppError> {
    let raw_link = payload
        .link
        .ok_or_else(|| AppError::bad_request(ErrorCode::LinkIsUndefined))?;
    let link = state.link_policy.validate_value(&raw_link)?;

    let favorites = payload
        .favorites
        .as_ref()
        .map(parse_bool)
        .transpose()?
        .unwrap_or(false);

    let bookmark = state
        .bookmark_service
        .create(link, payload.description, favorites)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedBookmark {
                guid: bookmark.guid,
                created_at: bookmark.created_at,
                favorites: bookmark.favorites,
            },
        }),
    ))
}

/// Returns a single bookmark.
///
/// # Endpoint
///
/// `GET /bookmarks/{guid}`
pub async fn get_bookmark_handler(
    State(state): State<AppState>,
    Path(guid): Path<String>,
) -> Result<Json<DataResponse<BookmarkResponse>>, AppError> {
    let guid = parse_uuid(&guid)?;
    let bookmark = state.bookmark_service.get(guid).await?;

    Ok(Json(DataResponse {
        data: bookmark.into(),
    }))
}

/// Partially updates a bookmark.
///
/// # Endpoint
///
/// `PATCH /bookmarks/{guid}`
///
/// # Request Body
///
/// All fields optional:
///
/// ```json
/// {
///   "link": "https://example.com",
///   "description": null,
///   "favorites": "true"
/// }
/// ```
///
/// # Errors
///
/// - 400 `BOOKMARKS_INVALID_UUID` for a malformed id
/// - 400 for a rejected link or favorites value
/// - 404 when no bookmark has this id
pub async fn update_bookmark_handler(
    State(state): State<AppState>,
    Path(guid): Path<String>,
    Json(payload): Json<UpdateBookmarkRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let guid = parse_uuid(&guid)?;

    let link = payload
        .link
        .as_ref()
        .map(|value| state.link_policy.validate_value(value))
        .transpose()?;

    let favorites = payload.favorites.as_ref().map(parse_bool).transpose()?;

    state
        .bookmark_service
        .update(
            guid,
            BookmarkChanges {
                link,
                description: payload.description,
                favorites,
            },
        )
        .await?;

    Ok(Json(MessageResponse {
        message: "Bookmark updated",
    }))
}

/// `PATCH /bookmarks` without an id segment.
pub async fn missing_guid_handler() -> AppError {
    AppError::bad_request(ErrorCode::GuidIsUndefined)
}

/// Deletes a bookmark.
///
/// # Endpoint
///
/// `DELETE /bookmarks/{guid}`
///
/// A malformed id cannot match any record and yields 404.
pub async fn delete_bookmark_handler(
    State(state): State<AppState>,
    Path(guid): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let guid = parse_uuid(&guid).map_err(|_| AppError::not_found(NOT_FOUND_MESSAGE))?;

    state.bookmark_service.delete(guid).await?;

    Ok(Json(MessageResponse {
        message: "Bookmark deleted",
    }))
}
