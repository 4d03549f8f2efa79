//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{
    BadgeService, NoticeService, PassService, ReferenceService, StageService, UserService,
};
use crate::domain::repositories::RecordStore;
use crate::infrastructure::storage::ObjectStorage;

/// Handler-facing state: one service per resource plus the shared record
/// store and media backend.
#[derive(Clone)]
pub struct AppState {
    pub stage_service: Arc<StageService>,
    pub pass_service: Arc<PassService>,
    pub badge_service: Arc<BadgeService>,
    pub notice_service: Arc<NoticeService>,
    pub user_service: Arc<UserService>,
    pub reference_service: Arc<ReferenceService>,
    pub record_store: Arc<dyn RecordStore>,
    pub media: Arc<dyn ObjectStorage>,
    /// Lifetime of issued signed media URLs.
    pub media_url_ttl: Duration,
}
