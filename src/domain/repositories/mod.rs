//! Repository traits defining the persistence boundary.
//!
//! Typed repositories cover each resource's CRUD surface; [`RecordStore`] is
//! the generic collection-keyed lookup used by the validation pipeline,
//! seeding, and health checks. All implementations live under
//! [`crate::infrastructure::persistence`].

pub mod badge_repository;
pub mod notice_repository;
pub mod pass_repository;
pub mod record_store;
pub mod reference_repository;
pub mod stage_repository;
pub mod user_repository;

pub use badge_repository::BadgeRepository;
pub use notice_repository::NoticeRepository;
pub use pass_repository::PassRepository;
pub use record_store::{FieldValue, RecordStore, StoreError};
pub use reference_repository::ReferenceRepository;
pub use stage_repository::StageRepository;
pub use user_repository::UserRepository;
