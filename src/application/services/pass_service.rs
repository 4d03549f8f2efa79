//! Pass booking service.

use std::sync::Arc;

use crate::api::dto::pass::{CREATE_PASS_RULES, CreatePassRequest};
use crate::domain::entities::Pass;
use crate::domain::repositories::{PassRepository, RecordStore};
use crate::error::AppError;

/// Books and cancels trail passes on behalf of the authenticated user.
pub struct PassService {
    passes: Arc<dyn PassRepository>,
    store: Arc<dyn RecordStore>,
}

impl PassService {
    pub fn new(passes: Arc<dyn PassRepository>, store: Arc<dyn RecordStore>) -> Self {
        Self { passes, store }
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Pass>, AppError> {
        self.passes.list_for_user(user_id).await
    }

    /// Returns the pass only if it belongs to `user_id`. A foreign pass is
    /// indistinguishable from a missing one.
    pub async fn get_for_user(&self, id: i64, user_id: i64) -> Result<Pass, AppError> {
        match self.passes.find_by_id(id).await? {
            Some(pass) if pass.user_id == user_id => Ok(pass),
            _ => Err(AppError::not_found("Pass not found", serde_json::json!({ "id": id }))),
        }
    }

    /// Validates the booking and creates the pass in `reserved` state.
    pub async fn create(&self, user_id: i64, request: CreatePassRequest) -> Result<Pass, AppError> {
        validator::Validate::validate(&request)?;
        CREATE_PASS_RULES
            .validate(&request, self.store.as_ref())
            .await?
            .into_result()?;

        self.passes.create(request.into_record(user_id)).await
    }

    /// Cancels the pass if it belongs to `user_id` and is still cancellable.
    pub async fn cancel(&self, id: i64, user_id: i64) -> Result<Pass, AppError> {
        let pass = self.get_for_user(id, user_id).await?;
        if !pass.is_cancellable() {
            return Err(AppError::conflict(
                "Pass can no longer be cancelled",
                serde_json::json!({ "status": pass.status }),
            ));
        }

        if !self.passes.cancel(id, user_id).await? {
            return Err(AppError::conflict(
                "Pass can no longer be cancelled",
                serde_json::json!({ "id": id }),
            ));
        }
        self.get_for_user(id, user_id).await
    }
}
