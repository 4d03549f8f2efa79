//! Profile DTOs. Phone and passport formats depend on the country, so the
//! patch is first merged with the stored profile into a [`ProfileUpdate`]
//! carrying a concrete country code, and the cross-field rules run on that.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{User, UserPatch};
use crate::validation::country::{passport_matches_country, phone_matches_country};
use crate::validation::engine::{ConstraintError, ConstraintTable};

/// Request to partially update the authenticated user's profile.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 40, message = "nickname must be 1-40 characters"))]
    pub nickname: Option<String>,

    #[validate(length(equal = 2, message = "country_code must be an ISO 3166-1 alpha-2 code"))]
    pub country_code: Option<String>,

    pub phone_number: Option<String>,

    pub passport_number: Option<String>,
}

/// The requested patch merged with the stored profile. `country_code` is
/// always concrete here, so the country-scoped rules never guess.
#[derive(Debug)]
pub struct ProfileUpdate {
    pub nickname: Option<String>,
    pub country_code: String,
    pub phone_number: Option<String>,
    pub passport_number: Option<String>,
}

impl ProfileUpdate {
    /// Merges `request` onto the current profile. Fields absent from the
    /// request keep their stored values so the cross-field rules see the
    /// pairing that would actually be persisted.
    pub fn merge(current: &User, request: UpdateProfileRequest) -> Self {
        Self {
            nickname: request.nickname,
            country_code: request
                .country_code
                .unwrap_or_else(|| current.country_code.clone()),
            phone_number: request.phone_number.or_else(|| current.phone_number.clone()),
            passport_number: request
                .passport_number
                .or_else(|| current.passport_number.clone()),
        }
    }

    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            nickname: self.nickname,
            country_code: Some(self.country_code),
            phone_number: self.phone_number,
            passport_number: self.passport_number,
        }
    }
}

fn phone_valid_for_country(dto: &ProfileUpdate) -> Result<bool, ConstraintError> {
    match &dto.phone_number {
        None => Ok(true),
        Some(phone) => Ok(phone_matches_country(&dto.country_code, phone)),
    }
}

fn passport_valid_for_country(dto: &ProfileUpdate) -> Result<bool, ConstraintError> {
    match &dto.passport_number {
        None => Ok(true),
        Some(passport) => Ok(passport_matches_country(&dto.country_code, passport)),
    }
}

/// Composite rules for a merged [`ProfileUpdate`].
pub static PROFILE_RULES: LazyLock<ConstraintTable<ProfileUpdate>> = LazyLock::new(|| {
    ConstraintTable::new()
        .rule(
            "phone_number",
            "phone number is not valid for the selected country",
            phone_valid_for_country,
        )
        .rule(
            "passport_number",
            "passport number is not valid for the selected country",
            passport_valid_for_country,
        )
});

/// Outbound profile representation.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub nickname: String,
    pub country_code: String,
    pub phone_number: Option<String>,
    pub passport_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            nickname: u.nickname,
            country_code: u.country_code,
            phone_number: u.phone_number,
            passport_number: u.passport_number,
            created_at: u.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(country: &str) -> User {
        User {
            id: 1,
            nickname: "hiker".to_string(),
            country_code: country.to_string(),
            phone_number: None,
            passport_number: None,
            created_at: Utc::now(),
        }
    }

    fn request() -> UpdateProfileRequest {
        UpdateProfileRequest {
            nickname: None,
            country_code: None,
            phone_number: None,
            passport_number: None,
        }
    }

    #[test]
    fn test_merge_keeps_stored_country_when_absent() {
        let merged = ProfileUpdate::merge(&user("KR"), request());
        assert_eq!(merged.country_code, "KR");
    }

    #[test]
    fn test_merge_prefers_requested_country() {
        let merged = ProfileUpdate::merge(
            &user("KR"),
            UpdateProfileRequest {
                country_code: Some("JP".to_string()),
                ..request()
            },
        );
        assert_eq!(merged.country_code, "JP");
    }

    #[test]
    fn test_phone_rule_is_country_scoped() {
        let same_number = "07911123456".to_string();

        let gb = ProfileUpdate {
            nickname: None,
            country_code: "GB".to_string(),
            phone_number: Some(same_number.clone()),
            passport_number: None,
        };
        let kr = ProfileUpdate {
            nickname: None,
            country_code: "KR".to_string(),
            phone_number: Some(same_number),
            passport_number: None,
        };

        assert!(phone_valid_for_country(&gb).unwrap());
        assert!(!phone_valid_for_country(&kr).unwrap());
    }

    #[test]
    fn test_absent_phone_passes_vacuously() {
        let merged = ProfileUpdate::merge(&user("KR"), request());
        assert!(phone_valid_for_country(&merged).unwrap());
        assert!(passport_valid_for_country(&merged).unwrap());
    }
}
