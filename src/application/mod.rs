//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::stage_service::StageService`] - Trail stage management
//! - [`services::pass_service::PassService`] - Pass booking and cancellation
//! - [`services::badge_service::BadgeService`] - Badges and their artwork
//! - [`services::notice_service::NoticeService`] - Announcements
//! - [`services::user_service::UserService`] - Hiker profiles
//! - [`services::reference_service::ReferenceService`] - Seeded reference data

pub mod services;
