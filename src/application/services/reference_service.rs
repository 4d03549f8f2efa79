//! Read-only access to seeded reference data.

use std::sync::Arc;

use crate::domain::entities::{Locale, Policy, Region};
use crate::domain::repositories::ReferenceRepository;
use crate::error::AppError;

pub struct ReferenceService {
    reference: Arc<dyn ReferenceRepository>,
}

impl ReferenceService {
    pub fn new(reference: Arc<dyn ReferenceRepository>) -> Self {
        Self { reference }
    }

    pub async fn regions(&self) -> Result<Vec<Region>, AppError> {
        self.reference.regions().await
    }

    pub async fn region(&self, id: i64) -> Result<Region, AppError> {
        self.reference
            .region_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Region not found", serde_json::json!({ "id": id })))
    }

    pub async fn locales(&self) -> Result<Vec<Locale>, AppError> {
        self.reference.locales().await
    }

    pub async fn policies(&self) -> Result<Vec<Policy>, AppError> {
        self.reference.policies().await
    }

    pub async fn policy(&self, kind: &str) -> Result<Policy, AppError> {
        self.reference
            .policy_by_kind(kind)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Policy not found", serde_json::json!({ "kind": kind }))
            })
    }
}
