//! PostgreSQL implementations of the persistence boundary.

pub mod pg_badge_repository;
pub mod pg_notice_repository;
pub mod pg_pass_repository;
pub mod pg_record_store;
pub mod pg_reference_repository;
pub mod pg_stage_repository;
pub mod pg_user_repository;
pub mod seed;

pub use pg_badge_repository::PgBadgeRepository;
pub use pg_notice_repository::PgNoticeRepository;
pub use pg_pass_repository::PgPassRepository;
pub use pg_record_store::PgRecordStore;
pub use pg_reference_repository::PgReferenceRepository;
pub use pg_stage_repository::PgStageRepository;
pub use pg_user_repository::PgUserRepository;
