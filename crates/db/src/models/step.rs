//! Step entity model and DTOs.

use roadmapdao_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::resource::Resource;

/// A row from the `steps` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Step {
    pub id: DbId,
    pub roadmap_id: DbId,
    pub title: String,
    pub description: String,
    /// Zero-based position within the roadmap. Not renumbered on delete.
    #[serde(rename = "order")]
    pub step_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A step together with its resources.
#[derive(Debug, Clone, Serialize)]
pub struct StepWithResources {
    #[serde(flatten)]
    pub step: Step,
    pub resources: Vec<Resource>,
}

/// DTO for appending a step to a roadmap.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStep {
    #[serde(default)]
    #[validate(length(min = 1, message = "Step title and description are required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Step title and description are required"))]
    pub description: String,
}

/// DTO for updating a step. Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStep {
    #[validate(length(min = 1, message = "Step title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Step description must not be empty"))]
    pub description: Option<String>,
}
