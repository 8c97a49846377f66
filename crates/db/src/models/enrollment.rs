//! Enrollment entity model and learner dashboard shapes.

use roadmapdao_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::user::ExpertIdentity;

/// A row from the `enrollments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub learner_id: DbId,
    pub roadmap_id: DbId,
    /// Percentage in `0..=100`.
    pub progress: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of a progress update.
///
/// `progress` stays a raw JSON value so type errors ("50", `true`) become a
/// validation failure rather than an extractor rejection. The body itself
/// must be an object; deserializing through a map refuses the positional
/// `[50]` form serde would otherwise accept for a struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "serde_json::Map<String, serde_json::Value>")]
pub struct UpdateProgress {
    pub progress: serde_json::Value,
}

impl From<serde_json::Map<String, serde_json::Value>> for UpdateProgress {
    fn from(mut body: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            progress: body.remove("progress").unwrap_or_default(),
        }
    }
}

/// Flat listing row: enrollment joined with its roadmap and author.
#[derive(Debug, Clone, FromRow)]
pub struct EnrollmentWithRoadmapRow {
    pub id: DbId,
    pub learner_id: DbId,
    pub roadmap_id: DbId,
    pub progress: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub roadmap_title: String,
    pub roadmap_description: String,
    pub expert_id: DbId,
    pub expert_wallet_address: String,
    pub step_count: i64,
}

/// Roadmap summary nested in an enrollment listing.
#[derive(Debug, Clone, Serialize)]
pub struct EnrolledRoadmap {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub expert: ExpertIdentity,
    pub step_count: i64,
}

/// An enrollment with the roadmap it tracks.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentWithRoadmap {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub roadmap: EnrolledRoadmap,
}

impl From<EnrollmentWithRoadmapRow> for EnrollmentWithRoadmap {
    fn from(row: EnrollmentWithRoadmapRow) -> Self {
        Self {
            enrollment: Enrollment {
                id: row.id,
                learner_id: row.learner_id,
                roadmap_id: row.roadmap_id,
                progress: row.progress,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            roadmap: EnrolledRoadmap {
                id: row.roadmap_id,
                title: row.roadmap_title,
                description: row.roadmap_description,
                expert: ExpertIdentity {
                    id: row.expert_id,
                    wallet_address: row.expert_wallet_address,
                },
                step_count: row.step_count,
            },
        }
    }
}
