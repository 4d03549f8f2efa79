//! Stage DTOs and the wire ↔ persistence converters.
//!
//! Outbound, a stored stage's flat minute count becomes `{hours, minutes}`,
//! its anchored open/close timestamps become `HH:MM:SS` strings, and the
//! five rating counters optionally collapse into a star → count histogram.
//! Inbound conversion is the inverse, rejecting malformed time strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::collection::Collection;
use crate::domain::entities::{NewStage, Stage, StagePatch};
use crate::domain::repositories::{FieldValue, RecordStore};
use crate::error::AppError;
use crate::validation::engine::{ConstraintError, ConstraintTable};
use crate::validation::exists::Exists;
use crate::validation::rich_text::rich_text_within;
use crate::validation::time_format::validate_time_of_day;
use crate::utils::unit_converters::{
    HoursMinutes, hours_and_minutes_to_minutes, minutes_to_hours_and_minutes,
    time_of_day_to_timestamp, timestamp_to_time_of_day,
};

/// Maximum summed character length of a stage description's text blocks.
pub const STAGE_DESCRIPTION_MAX: usize = 4000;

/// Wire representation of a duration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct DurationDto {
    pub hours: u32,
    #[validate(range(max = 59, message = "minutes must be between 0 and 59"))]
    pub minutes: u32,
}

impl From<DurationDto> for HoursMinutes {
    fn from(d: DurationDto) -> Self {
        HoursMinutes {
            hours: d.hours,
            minutes: d.minutes,
        }
    }
}

impl From<HoursMinutes> for DurationDto {
    fn from(hm: HoursMinutes) -> Self {
        DurationDto {
            hours: hm.hours,
            minutes: hm.minutes,
        }
    }
}

/// Request to create a stage.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStageRequest {
    #[validate(length(min = 1, max = 80, message = "name must be 1-80 characters"))]
    pub name: String,

    pub region_id: i64,

    #[validate(range(min = 0, message = "distance must not be negative"))]
    pub distance_meters: i32,

    #[validate(nested)]
    pub duration: DurationDto,

    #[validate(custom(function = validate_time_of_day))]
    pub open_time: String,

    #[validate(custom(function = validate_time_of_day))]
    pub close_time: String,

    #[validate(range(min = 1, max = 5, message = "difficulty must be 1-5"))]
    pub difficulty: i16,

    /// Serialized rich-text block sequence; length-checked by the
    /// constraint table.
    pub description: String,
}

fn region_exists<'a>(
    dto: &'a CreateStageRequest,
    store: &'a dyn RecordStore,
) -> futures::future::BoxFuture<'a, Result<bool, ConstraintError>> {
    Box::pin(async move {
        Exists::new(Collection::Region)
            .check(store, Some(&FieldValue::Int(dto.region_id)))
            .await
    })
}

fn description_fits(dto: &CreateStageRequest) -> Result<bool, ConstraintError> {
    rich_text_within(&dto.description, STAGE_DESCRIPTION_MAX)
}

/// Composite rules for [`CreateStageRequest`].
pub static CREATE_STAGE_RULES: LazyLock<ConstraintTable<CreateStageRequest>> =
    LazyLock::new(|| {
        ConstraintTable::new()
            .async_rule("region_id", "region does not exist", region_exists)
            .rule(
                "description",
                "description exceeds the maximum length",
                description_fits,
            )
    });

impl CreateStageRequest {
    /// Inbound conversion to the persistence representation.
    ///
    /// Format validation is expected to have run first; a malformed time
    /// string still fails here instead of producing a bogus timestamp.
    pub fn into_record(self) -> Result<NewStage, AppError> {
        let open_time = parse_time_of_day(&self.open_time)?;
        let close_time = parse_time_of_day(&self.close_time)?;

        Ok(NewStage {
            region_id: self.region_id,
            name: self.name,
            distance_meters: self.distance_meters,
            duration_minutes: hours_and_minutes_to_minutes(self.duration.into()) as i32,
            open_time,
            close_time,
            difficulty: self.difficulty,
            description: self.description,
        })
    }
}

/// Request to partially update a stage. All fields optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStageRequest {
    #[validate(length(min = 1, max = 80, message = "name must be 1-80 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 0, message = "distance must not be negative"))]
    pub distance_meters: Option<i32>,

    #[validate(nested)]
    pub duration: Option<DurationDto>,

    #[validate(custom(function = validate_time_of_day))]
    pub open_time: Option<String>,

    #[validate(custom(function = validate_time_of_day))]
    pub close_time: Option<String>,

    #[validate(range(min = 1, max = 5, message = "difficulty must be 1-5"))]
    pub difficulty: Option<i16>,

    pub description: Option<String>,
}

fn patch_description_fits(dto: &UpdateStageRequest) -> Result<bool, ConstraintError> {
    match &dto.description {
        None => Ok(true),
        Some(d) => rich_text_within(d, STAGE_DESCRIPTION_MAX),
    }
}

/// Composite rules for [`UpdateStageRequest`].
pub static UPDATE_STAGE_RULES: LazyLock<ConstraintTable<UpdateStageRequest>> =
    LazyLock::new(|| {
        ConstraintTable::new().rule(
            "description",
            "description exceeds the maximum length",
            patch_description_fits,
        )
    });

impl UpdateStageRequest {
    pub fn into_patch(self) -> Result<StagePatch, AppError> {
        let open_time = self.open_time.as_deref().map(parse_time_of_day).transpose()?;
        let close_time = self
            .close_time
            .as_deref()
            .map(parse_time_of_day)
            .transpose()?;

        Ok(StagePatch {
            name: self.name,
            distance_meters: self.distance_meters,
            duration_minutes: self
                .duration
                .map(|d| hours_and_minutes_to_minutes(d.into()) as i32),
            open_time,
            close_time,
            difficulty: self.difficulty,
            description: self.description,
        })
    }
}

fn parse_time_of_day(value: &str) -> Result<DateTime<Utc>, AppError> {
    time_of_day_to_timestamp(value).map_err(|e| {
        AppError::bad_request(
            "Invalid time-of-day value",
            json!({ "value": e.0, "expected": "HH:MM:SS" }),
        )
    })
}

/// Rating counters, either flat (persistence shape) or collapsed into a
/// star → count histogram when the client asks for it.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RatingView {
    Flat {
        rating_one_count: i32,
        rating_two_count: i32,
        rating_three_count: i32,
        rating_four_count: i32,
        rating_five_count: i32,
    },
    Histogram { star_counts: BTreeMap<u8, i32> },
}

/// Outbound stage representation.
#[derive(Debug, Serialize)]
pub struct StageResponse {
    pub id: i64,
    pub region_id: i64,
    pub name: String,
    pub distance_meters: i32,
    pub duration: DurationDto,
    pub open_time: String,
    pub close_time: String,
    pub difficulty: i16,
    #[serde(flatten)]
    pub ratings: RatingView,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl StageResponse {
    /// Outbound conversion from the persistence representation.
    ///
    /// With `star_counts` set, the five flat counters are replaced by a
    /// single histogram field and are absent from the serialized output.
    pub fn from_record(stage: &Stage, star_counts: bool) -> Self {
        let ratings = if star_counts {
            RatingView::Histogram {
                star_counts: BTreeMap::from([
                    (1, stage.rating_one_count),
                    (2, stage.rating_two_count),
                    (3, stage.rating_three_count),
                    (4, stage.rating_four_count),
                    (5, stage.rating_five_count),
                ]),
            }
        } else {
            RatingView::Flat {
                rating_one_count: stage.rating_one_count,
                rating_two_count: stage.rating_two_count,
                rating_three_count: stage.rating_three_count,
                rating_four_count: stage.rating_four_count,
                rating_five_count: stage.rating_five_count,
            }
        };

        Self {
            id: stage.id,
            region_id: stage.region_id,
            name: stage.name.clone(),
            distance_meters: stage.distance_meters,
            duration: minutes_to_hours_and_minutes(stage.duration_minutes.max(0) as u32).into(),
            open_time: timestamp_to_time_of_day(stage.open_time),
            close_time: timestamp_to_time_of_day(stage.close_time),
            difficulty: stage.difficulty,
            ratings,
            description: stage.description.clone(),
            created_at: stage.created_at,
        }
    }
}
