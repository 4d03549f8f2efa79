//! Profile service.

use std::sync::Arc;

use crate::api::dto::user::{PROFILE_RULES, ProfileUpdate, UpdateProfileRequest};
use crate::domain::entities::User;
use crate::domain::repositories::{RecordStore, UserRepository};
use crate::error::AppError;

pub struct UserService {
    users: Arc<dyn UserRepository>,
    store: Arc<dyn RecordStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, store: Arc<dyn RecordStore>) -> Self {
        Self { users, store }
    }

    pub async fn get(&self, id: i64) -> Result<User, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", serde_json::json!({ "id": id })))
    }

    /// Applies a profile patch. The patch is merged with the stored profile
    /// before validation so the country-scoped rules always see the country
    /// that would be persisted alongside the phone and passport values.
    pub async fn update_profile(
        &self,
        id: i64,
        request: UpdateProfileRequest,
    ) -> Result<User, AppError> {
        validator::Validate::validate(&request)?;

        let current = self.get(id).await?;
        let merged = ProfileUpdate::merge(&current, request);

        PROFILE_RULES
            .validate(&merged, self.store.as_ref())
            .await?
            .into_result()?;

        self.users.update(id, merged.into_patch()).await
    }
}
