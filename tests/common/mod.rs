#![allow(dead_code)]

//! In-memory test doubles for the persistence and storage boundaries.
//!
//! Handler tests run against the real router, services, and validation
//! pipeline with these fakes underneath, so no database is required.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use trailpass::application::services::{
    BadgeService, NoticeService, PassService, ReferenceService, StageService, UserService,
};
use trailpass::domain::Collection;
use trailpass::domain::entities::{
    Badge, Locale, NewBadge, NewNotice, NewPass, NewStage, Notice, NoticePatch, Pass, PassStatus,
    Policy, Region, Stage, StagePatch, User, UserPatch,
};
use trailpass::domain::repositories::{
    BadgeRepository, FieldValue, NoticeRepository, PassRepository, RecordStore,
    ReferenceRepository, StageRepository, StoreError, UserRepository,
};
use trailpass::error::AppError;
use trailpass::infrastructure::storage::{MediaCommand, ObjectStorage, UrlSigner};
use trailpass::state::AppState;
use trailpass::utils::parse_sort::SortDirective;

/// Bearer token whose payload decodes to the given user id. The signature
/// segment is opaque because verification happens upstream.
pub fn bearer_token(user_id: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":{user_id}}}"#));
    format!("{header}.{payload}.test-signature")
}

// ─── Record store ────────────────────────────────────────────────────────────

/// Record store fake backed by per-collection id sets.
#[derive(Default)]
pub struct InMemoryRecordStore {
    ids: Mutex<HashMap<Collection, Vec<i64>>>,
}

impl InMemoryRecordStore {
    pub fn with(collections: &[(Collection, &[i64])]) -> Self {
        let store = Self::default();
        {
            let mut ids = store.ids.lock().unwrap();
            for (collection, records) in collections {
                ids.insert(*collection, records.to_vec());
            }
        }
        store
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn find_unique(
        &self,
        collection: Collection,
        field: &str,
        value: &FieldValue,
    ) -> Result<Option<Value>, StoreError> {
        collection
            .field(field)
            .ok_or_else(|| StoreError::UnknownField {
                collection,
                field: field.to_string(),
            })?;

        let FieldValue::Int(id) = value else {
            return Ok(None);
        };

        let ids = self.ids.lock().unwrap();
        let found = ids
            .get(&collection)
            .is_some_and(|records| records.contains(id));
        Ok(found.then(|| serde_json::json!({ "id": id })))
    }

    async fn upsert(&self, collection: Collection, data: Value) -> Result<(), StoreError> {
        if let Some(id) = data.get("id").and_then(Value::as_i64) {
            let mut ids = self.ids.lock().unwrap();
            let records = ids.entry(collection).or_default();
            if !records.contains(&id) {
                records.push(id);
            }
        }
        Ok(())
    }

    async fn delete_many(&self, collection: Collection, targets: &[i64]) -> Result<u64, StoreError> {
        let mut ids = self.ids.lock().unwrap();
        let Some(records) = ids.get_mut(&collection) else {
            return Ok(0);
        };
        let before = records.len();
        records.retain(|id| !targets.contains(id));
        Ok((before - records.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ─── Repositories ────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryStageRepository {
    stages: Mutex<Vec<Stage>>,
    next_id: AtomicI64,
}

impl InMemoryStageRepository {
    pub fn insert(&self, stage: Stage) {
        self.stages.lock().unwrap().push(stage);
    }
}

#[async_trait]
impl StageRepository for InMemoryStageRepository {
    async fn list(
        &self,
        offset: i64,
        limit: i64,
        _sort: &SortDirective,
    ) -> Result<Vec<Stage>, AppError> {
        let stages = self.stages.lock().unwrap();
        Ok(stages
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.stages.lock().unwrap().len() as i64)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Stage>, AppError> {
        Ok(self
            .stages
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn create(&self, new_stage: NewStage) -> Result<Stage, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stage = Stage {
            id,
            region_id: new_stage.region_id,
            name: new_stage.name,
            distance_meters: new_stage.distance_meters,
            duration_minutes: new_stage.duration_minutes,
            open_time: new_stage.open_time,
            close_time: new_stage.close_time,
            difficulty: new_stage.difficulty,
            rating_one_count: 0,
            rating_two_count: 0,
            rating_three_count: 0,
            rating_four_count: 0,
            rating_five_count: 0,
            description: new_stage.description,
            created_at: Utc::now(),
        };
        self.stages.lock().unwrap().push(stage.clone());
        Ok(stage)
    }

    async fn update(&self, id: i64, patch: StagePatch) -> Result<Stage, AppError> {
        let mut stages = self.stages.lock().unwrap();
        let stage = stages
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::not_found("Stage not found", serde_json::json!({ "id": id })))?;

        if let Some(name) = patch.name {
            stage.name = name;
        }
        if let Some(distance) = patch.distance_meters {
            stage.distance_meters = distance;
        }
        if let Some(minutes) = patch.duration_minutes {
            stage.duration_minutes = minutes;
        }
        if let Some(open) = patch.open_time {
            stage.open_time = open;
        }
        if let Some(close) = patch.close_time {
            stage.close_time = close;
        }
        if let Some(difficulty) = patch.difficulty {
            stage.difficulty = difficulty;
        }
        if let Some(description) = patch.description {
            stage.description = description;
        }
        Ok(stage.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut stages = self.stages.lock().unwrap();
        let before = stages.len();
        stages.retain(|s| s.id != id);
        Ok(stages.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryPassRepository {
    passes: Mutex<Vec<Pass>>,
    next_id: AtomicI64,
}

impl InMemoryPassRepository {
    pub fn insert(&self, pass: Pass) {
        self.passes.lock().unwrap().push(pass);
    }
}

#[async_trait]
impl PassRepository for InMemoryPassRepository {
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Pass>, AppError> {
        Ok(self
            .passes
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Pass>, AppError> {
        Ok(self
            .passes
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(&self, new_pass: NewPass) -> Result<Pass, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let pass = Pass {
            id,
            user_id: new_pass.user_id,
            stage_ids: new_pass.stage_ids,
            starts_on: new_pass.starts_on,
            days: new_pass.days,
            status: PassStatus::Reserved,
            created_at: Utc::now(),
        };
        self.passes.lock().unwrap().push(pass.clone());
        Ok(pass)
    }

    async fn cancel(&self, id: i64, user_id: i64) -> Result<bool, AppError> {
        let mut passes = self.passes.lock().unwrap();
        let Some(pass) = passes
            .iter_mut()
            .find(|p| p.id == id && p.user_id == user_id)
        else {
            return Ok(false);
        };
        if !pass.is_cancellable() {
            return Ok(false);
        }
        pass.status = PassStatus::Cancelled;
        Ok(true)
    }
}

#[derive(Default)]
pub struct InMemoryBadgeRepository {
    badges: Mutex<Vec<Badge>>,
    next_id: AtomicI64,
}

impl InMemoryBadgeRepository {
    pub fn insert(&self, badge: Badge) {
        self.badges.lock().unwrap().push(badge);
    }
}

#[async_trait]
impl BadgeRepository for InMemoryBadgeRepository {
    async fn list(&self) -> Result<Vec<Badge>, AppError> {
        Ok(self.badges.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Badge>, AppError> {
        Ok(self
            .badges
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn create(&self, new_badge: NewBadge) -> Result<Badge, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let badge = Badge {
            id,
            stage_id: new_badge.stage_id,
            name: new_badge.name,
            image_key: new_badge.image_key,
            created_at: Utc::now(),
        };
        self.badges.lock().unwrap().push(badge.clone());
        Ok(badge)
    }

    async fn delete(&self, id: i64) -> Result<Option<Badge>, AppError> {
        let mut badges = self.badges.lock().unwrap();
        let position = badges.iter().position(|b| b.id == id);
        Ok(position.map(|i| badges.remove(i)))
    }
}

#[derive(Default)]
pub struct InMemoryNoticeRepository {
    notices: Mutex<Vec<Notice>>,
    next_id: AtomicI64,
}

impl InMemoryNoticeRepository {
    pub fn insert(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[async_trait]
impl NoticeRepository for InMemoryNoticeRepository {
    async fn list(
        &self,
        offset: i64,
        limit: i64,
        _sort: &SortDirective,
    ) -> Result<Vec<Notice>, AppError> {
        let notices = self.notices.lock().unwrap();
        Ok(notices
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Notice>, AppError> {
        Ok(self
            .notices
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned())
    }

    async fn create(&self, new_notice: NewNotice) -> Result<Notice, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let notice = Notice {
            id,
            title: new_notice.title,
            content: new_notice.content,
            created_at: Utc::now(),
        };
        self.notices.lock().unwrap().push(notice.clone());
        Ok(notice)
    }

    async fn update(&self, id: i64, patch: NoticePatch) -> Result<Notice, AppError> {
        let mut notices = self.notices.lock().unwrap();
        let notice = notices
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::not_found("Notice not found", serde_json::json!({ "id": id })))?;

        if let Some(title) = patch.title {
            notice.title = title;
        }
        if let Some(content) = patch.content {
            notice.content = content;
        }
        Ok(notice.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut notices = self.notices.lock().unwrap();
        let before = notices.len();
        notices.retain(|n| n.id != id);
        Ok(notices.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found("User not found", serde_json::json!({ "id": id })))?;

        if let Some(nickname) = patch.nickname {
            user.nickname = nickname;
        }
        if let Some(country_code) = patch.country_code {
            user.country_code = country_code;
        }
        if let Some(phone) = patch.phone_number {
            user.phone_number = Some(phone);
        }
        if let Some(passport) = patch.passport_number {
            user.passport_number = Some(passport);
        }
        Ok(user.clone())
    }
}

#[derive(Default)]
pub struct InMemoryReferenceRepository {
    pub regions: Mutex<Vec<Region>>,
    pub locales: Mutex<Vec<Locale>>,
    pub policies: Mutex<Vec<Policy>>,
}

#[async_trait]
impl ReferenceRepository for InMemoryReferenceRepository {
    async fn regions(&self) -> Result<Vec<Region>, AppError> {
        Ok(self.regions.lock().unwrap().clone())
    }

    async fn region_by_id(&self, id: i64) -> Result<Option<Region>, AppError> {
        Ok(self
            .regions
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn locales(&self) -> Result<Vec<Locale>, AppError> {
        Ok(self.locales.lock().unwrap().clone())
    }

    async fn policies(&self) -> Result<Vec<Policy>, AppError> {
        Ok(self.policies.lock().unwrap().clone())
    }

    async fn policy_by_kind(&self, kind: &str) -> Result<Option<Policy>, AppError> {
        Ok(self
            .policies
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.kind == kind)
            .cloned())
    }
}

// ─── Object storage ──────────────────────────────────────────────────────────

/// Object storage fake recording deletions and serving from a map.
pub struct RecordingObjectStorage {
    signer: UrlSigner,
    pub objects: Mutex<HashMap<String, Vec<u8>>>,
    pub deleted: Mutex<Vec<String>>,
}

impl Default for RecordingObjectStorage {
    fn default() -> Self {
        Self {
            signer: UrlSigner::new(b"test-secret".to_vec(), "http://test.local"),
            objects: Mutex::new(HashMap::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ObjectStorage for RecordingObjectStorage {
    fn signed_url(&self, command: MediaCommand, key: &str, ttl: Duration) -> String {
        let expires_at = Utc::now().timestamp() + ttl.as_secs() as i64;
        self.signer.signed_url(command, key, expires_at)
    }

    fn verify(&self, command: MediaCommand, key: &str, expires_at: i64, signature: &str) -> bool {
        self.signer
            .verify(command, key, expires_at, signature, Utc::now().timestamp())
    }

    async fn put_object(&self, key: &str, bytes: &[u8]) -> Result<(), AppError> {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        Ok(self.objects.lock().unwrap().get(key).cloned())
    }

    async fn delete_objects(&self, keys: &[String]) -> Result<(), AppError> {
        self.deleted.lock().unwrap().extend_from_slice(keys);
        Ok(())
    }
}

// ─── State assembly ──────────────────────────────────────────────────────────

/// Everything a handler test might want to reach into after the request.
pub struct TestContext {
    pub state: AppState,
    pub stages: Arc<InMemoryStageRepository>,
    pub passes: Arc<InMemoryPassRepository>,
    pub badges: Arc<InMemoryBadgeRepository>,
    pub notices: Arc<InMemoryNoticeRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub reference: Arc<InMemoryReferenceRepository>,
    pub record_store: Arc<InMemoryRecordStore>,
    pub media: Arc<RecordingObjectStorage>,
}

/// Builds an [`AppState`] wired to fresh in-memory fakes.
pub fn create_test_state(record_store: InMemoryRecordStore) -> TestContext {
    let stages = Arc::new(InMemoryStageRepository::default());
    let passes = Arc::new(InMemoryPassRepository::default());
    let badges = Arc::new(InMemoryBadgeRepository::default());
    let notices = Arc::new(InMemoryNoticeRepository::default());
    let users = Arc::new(InMemoryUserRepository::default());
    let reference = Arc::new(InMemoryReferenceRepository::default());
    let record_store = Arc::new(record_store);
    let media = Arc::new(RecordingObjectStorage::default());

    let store: Arc<dyn RecordStore> = record_store.clone();
    let media_dyn: Arc<dyn ObjectStorage> = media.clone();

    let state = AppState {
        stage_service: Arc::new(StageService::new(stages.clone(), store.clone())),
        pass_service: Arc::new(PassService::new(passes.clone(), store.clone())),
        badge_service: Arc::new(BadgeService::new(
            badges.clone(),
            store.clone(),
            media_dyn.clone(),
        )),
        notice_service: Arc::new(NoticeService::new(notices.clone(), store.clone())),
        user_service: Arc::new(UserService::new(users.clone(), store.clone())),
        reference_service: Arc::new(ReferenceService::new(reference.clone())),
        record_store: store,
        media: media_dyn,
        media_url_ttl: Duration::from_secs(900),
    };

    TestContext {
        state,
        stages,
        passes,
        badges,
        notices,
        users,
        reference,
        record_store,
        media,
    }
}

/// A stage row for seeding fakes.
pub fn stage_fixture(id: i64, region_id: i64) -> Stage {
    use trailpass::utils::unit_converters::time_of_day_to_timestamp;

    Stage {
        id,
        region_id,
        name: format!("Stage {id}"),
        distance_meters: 8_000,
        duration_minutes: 150,
        open_time: time_of_day_to_timestamp("07:00:00").unwrap(),
        close_time: time_of_day_to_timestamp("19:00:00").unwrap(),
        difficulty: 2,
        rating_one_count: 0,
        rating_two_count: 1,
        rating_three_count: 2,
        rating_four_count: 3,
        rating_five_count: 4,
        description: r#"[{"type":"paragraph","text":"A gentle forest walk."}]"#.to_string(),
        created_at: Utc::now(),
    }
}

/// A user row for seeding fakes.
pub fn user_fixture(id: i64, country_code: &str) -> User {
    User {
        id,
        nickname: format!("hiker-{id}"),
        country_code: country_code.to_string(),
        phone_number: None,
        passport_number: None,
        created_at: Utc::now(),
    }
}
