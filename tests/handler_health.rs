mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use bookmarks_api::domain::entities::{Bookmark, BookmarkPatch, NewBookmark};
use bookmarks_api::domain::query::{BookmarkPage, BookmarkQuery};
use bookmarks_api::domain::repositories::BookmarkRepository;
use bookmarks_api::error::AppError;
use bookmarks_api::routes::app_router;
use bookmarks_api::state::AppState;
use bookmarks_api::validation::LinkPolicy;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (server, _repo) = common::make_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["storage"]["backend"], "memory");
    assert_eq!(json["storage"]["status"], "ok");
}

/// Store whose every call fails.
struct UnreachableRepository;

#[async_trait]
impl BookmarkRepository for UnreachableRepository {
    async fn create(&self, _new: NewBookmark) -> Result<Bookmark, AppError> {
        Err(AppError::internal("Database error"))
    }

    async fn find_by_id(&self, _guid: Uuid) -> Result<Option<Bookmark>, AppError> {
        Err(AppError::internal("Database error"))
    }

    async fn update(&self, _guid: Uuid, _patch: BookmarkPatch) -> Result<(), AppError> {
        Err(AppError::internal("Database error"))
    }

    async fn delete(&self, _guid: Uuid) -> Result<(), AppError> {
        Err(AppError::internal("Database error"))
    }

    async fn find_and_count(&self, _query: &BookmarkQuery) -> Result<BookmarkPage, AppError> {
        Err(AppError::internal("Database error"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal("Database error"))
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

fn unreachable_server() -> TestServer {
    let state = AppState::new(Arc::new(UnreachableRepository), LinkPolicy::default());
    TestServer::new(app_router(state)).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let server = unreachable_server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["storage"]["backend"], "postgres");
    assert_eq!(json["storage"]["status"], "error");
}

#[tokio::test]
async fn test_storage_failure_returns_500() {
    let server = unreachable_server();

    let response = server.get("/bookmarks").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["message"], "Database error");
}
