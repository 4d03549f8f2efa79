//! HTTP request handlers.

pub mod badges;
pub mod health;
pub mod media;
pub mod notices;
pub mod passes;
pub mod reference;
pub mod stages;
pub mod users;
