use std::sync::Arc;

use crate::application::services::BookmarkService;
use crate::domain::repositories::BookmarkRepository;
use crate::validation::LinkPolicy;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub bookmark_service: Arc<BookmarkService>,
    pub link_policy: Arc<LinkPolicy>,
}

impl AppState {
    pub fn new(repository: Arc<dyn BookmarkRepository>, link_policy: LinkPolicy) -> Self {
        Self {
            bookmark_service: Arc::new(BookmarkService::new(repository)),
            link_policy: Arc::new(link_policy),
        }
    }
}
