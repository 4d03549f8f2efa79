//! Business logic services for the application layer.

pub mod badge_service;
pub mod notice_service;
pub mod pass_service;
pub mod reference_service;
pub mod stage_service;
pub mod user_service;

pub use badge_service::BadgeService;
pub use notice_service::NoticeService;
pub use pass_service::PassService;
pub use reference_service::ReferenceService;
pub use stage_service::StageService;
pub use user_service::UserService;
