//! Roadmap entity model, listing/detail shapes, and DTOs.

use roadmapdao_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::step::StepWithResources;
use crate::models::user::ExpertIdentity;

/// A row from the `roadmaps` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Roadmap {
    pub id: DbId,
    pub expert_id: DbId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat listing row joined with the author and aggregate counts.
#[derive(Debug, Clone, FromRow)]
pub struct RoadmapSummaryRow {
    pub id: DbId,
    pub expert_id: DbId,
    pub expert_wallet_address: String,
    pub title: String,
    pub description: String,
    pub step_count: i64,
    pub enrollment_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A roadmap as it appears in listings.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapSummary {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub expert: ExpertIdentity,
    pub step_count: i64,
    pub enrollment_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<RoadmapSummaryRow> for RoadmapSummary {
    fn from(row: RoadmapSummaryRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            expert: ExpertIdentity {
                id: row.expert_id,
                wallet_address: row.expert_wallet_address,
            },
            step_count: row.step_count,
            enrollment_count: row.enrollment_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Full roadmap with its author, ordered steps and their resources.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapDetail {
    #[serde(flatten)]
    pub roadmap: Roadmap,
    pub expert: ExpertIdentity,
    pub enrollment_count: i64,
    /// Ascending by step `order`.
    pub steps: Vec<StepWithResources>,
}

/// DTO for creating a roadmap. Missing fields deserialize as empty strings so
/// they fail validation with a 400 instead of a JSON rejection.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoadmap {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and description are required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and description are required"))]
    pub description: String,
}

/// DTO for updating a roadmap. Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRoadmap {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,
}
