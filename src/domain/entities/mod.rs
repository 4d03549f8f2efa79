//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic, following the
//! "new type" pattern: `NewStage`, `NewPass`, … for creation and
//! `StagePatch`, `NoticePatch`, `UserPatch` for partial updates.

pub mod badge;
pub mod notice;
pub mod pass;
pub mod reference;
pub mod stage;
pub mod user;

pub use badge::{Badge, NewBadge};
pub use notice::{NewNotice, Notice, NoticePatch};
pub use pass::{NewPass, Pass, PassStatus};
pub use reference::{Locale, Policy, Region};
pub use stage::{NewStage, Stage, StagePatch};
pub use user::{User, UserPatch};
