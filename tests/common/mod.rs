#![allow(dead_code)]

use axum_test::TestServer;
use bookmarks_api::domain::entities::NewBookmark;
use bookmarks_api::domain::repositories::BookmarkRepository;
use bookmarks_api::infrastructure::persistence::InMemoryBookmarkRepository;
use bookmarks_api::routes::app_router;
use bookmarks_api::state::AppState;
use bookmarks_api::validation::LinkPolicy;
use chrono::DateTime;
use std::sync::Arc;
use uuid::Uuid;

pub fn create_test_state() -> (AppState, Arc<InMemoryBookmarkRepository>) {
    let repo = Arc::new(InMemoryBookmarkRepository::new());
    let state = AppState::new(repo.clone(), LinkPolicy::default());
    (state, repo)
}

/// Full application router over a fresh in-memory store.
pub fn make_server() -> (TestServer, Arc<InMemoryBookmarkRepository>) {
    let (state, repo) = create_test_state();
    (TestServer::new(app_router(state)).unwrap(), repo)
}

pub async fn seed_bookmark(
    repo: &InMemoryBookmarkRepository,
    link: &str,
    created_ms: i64,
    favorites: bool,
) -> Uuid {
    let guid = Uuid::new_v4();
    repo.create(NewBookmark {
        guid,
        link: link.to_string(),
        created_at: DateTime::from_timestamp_millis(created_ms).unwrap(),
        description: None,
        favorites,
    })
    .await
    .unwrap();
    guid
}
