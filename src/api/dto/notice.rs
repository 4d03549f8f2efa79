//! Notice DTOs. Content is rich text, length-checked structurally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{NewNotice, Notice, NoticePatch};
use crate::validation::engine::{ConstraintError, ConstraintTable};
use crate::validation::rich_text::rich_text_within;

/// Maximum summed character length of a notice's text blocks.
pub const NOTICE_CONTENT_MAX: usize = 2000;

/// Request to publish a notice.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNoticeRequest {
    #[validate(length(min = 1, max = 120, message = "title must be 1-120 characters"))]
    pub title: String,

    /// Serialized rich-text block sequence.
    pub content: String,
}

fn content_fits(dto: &CreateNoticeRequest) -> Result<bool, ConstraintError> {
    rich_text_within(&dto.content, NOTICE_CONTENT_MAX)
}

/// Composite rules for [`CreateNoticeRequest`].
pub static CREATE_NOTICE_RULES: LazyLock<ConstraintTable<CreateNoticeRequest>> =
    LazyLock::new(|| {
        ConstraintTable::new().rule(
            "content",
            "content exceeds the maximum length",
            content_fits,
        )
    });

impl CreateNoticeRequest {
    pub fn into_record(self) -> NewNotice {
        NewNotice {
            title: self.title,
            content: self.content,
        }
    }
}

/// Request to partially update a notice.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNoticeRequest {
    #[validate(length(min = 1, max = 120, message = "title must be 1-120 characters"))]
    pub title: Option<String>,

    pub content: Option<String>,
}

fn patch_content_fits(dto: &UpdateNoticeRequest) -> Result<bool, ConstraintError> {
    match &dto.content {
        None => Ok(true),
        Some(c) => rich_text_within(c, NOTICE_CONTENT_MAX),
    }
}

/// Composite rules for [`UpdateNoticeRequest`].
pub static UPDATE_NOTICE_RULES: LazyLock<ConstraintTable<UpdateNoticeRequest>> =
    LazyLock::new(|| {
        ConstraintTable::new().rule(
            "content",
            "content exceeds the maximum length",
            patch_content_fits,
        )
    });

impl UpdateNoticeRequest {
    pub fn into_patch(self) -> NoticePatch {
        NoticePatch {
            title: self.title,
            content: self.content,
        }
    }
}

/// Outbound notice representation.
#[derive(Debug, Serialize)]
pub struct NoticeResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Notice> for NoticeResponse {
    fn from(n: Notice) -> Self {
        Self {
            id: n.id,
            title: n.title,
            content: n.content,
            created_at: n.created_at,
        }
    }
}
