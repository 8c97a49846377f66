//! Repository for the `enrollments` table.

use roadmapdao_core::progress::INITIAL_PROGRESS;
use roadmapdao_core::types::DbId;
use sqlx::PgPool;

use crate::models::enrollment::{Enrollment, EnrollmentWithRoadmap, EnrollmentWithRoadmapRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, learner_id, roadmap_id, progress, created_at, updated_at";

/// Provides enrollment creation, lookup, and progress tracking.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Enroll `learner_id` in `roadmap_id` with zero progress.
    ///
    /// Returns `None` if the learner is already enrolled. The duplicate check
    /// is the `uq_enrollments_learner_roadmap` constraint itself, so two
    /// concurrent requests produce exactly one row.
    pub async fn create(
        pool: &PgPool,
        learner_id: DbId,
        roadmap_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (learner_id, roadmap_id, progress)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_enrollments_learner_roadmap DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(learner_id)
            .bind(roadmap_id)
            .bind(INITIAL_PROGRESS)
            .fetch_optional(pool)
            .await
    }

    /// Find the learner's enrollment in a roadmap.
    pub async fn find_for_learner(
        pool: &PgPool,
        learner_id: DbId,
        roadmap_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM enrollments WHERE learner_id = $1 AND roadmap_id = $2"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(learner_id)
            .bind(roadmap_id)
            .fetch_optional(pool)
            .await
    }

    /// List a learner's enrollments with roadmap summaries, most recently
    /// updated first.
    pub async fn list_by_learner(
        pool: &PgPool,
        learner_id: DbId,
    ) -> Result<Vec<EnrollmentWithRoadmap>, sqlx::Error> {
        let rows = sqlx::query_as::<_, EnrollmentWithRoadmapRow>(
            "SELECT e.id, e.learner_id, e.roadmap_id, e.progress, e.created_at, e.updated_at,
                    r.title AS roadmap_title, r.description AS roadmap_description,
                    u.id AS expert_id, u.wallet_address AS expert_wallet_address,
                    (SELECT COUNT(*) FROM steps s WHERE s.roadmap_id = r.id) AS step_count
             FROM enrollments e
             JOIN roadmaps r ON r.id = e.roadmap_id
             JOIN users u ON u.id = r.expert_id
             WHERE e.learner_id = $1
             ORDER BY e.updated_at DESC, e.id DESC",
        )
        .bind(learner_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(EnrollmentWithRoadmap::from).collect())
    }

    /// Set the progress of an enrollment owned by `learner_id`.
    ///
    /// `progress` must already be validated to `0..=100`; the table's CHECK
    /// constraint rejects anything else. Returns `None` if the enrollment does
    /// not exist or belongs to another learner.
    pub async fn update_progress_owned(
        pool: &PgPool,
        id: DbId,
        learner_id: DbId,
        progress: i32,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "UPDATE enrollments SET progress = $3
             WHERE id = $1 AND learner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .bind(learner_id)
            .bind(progress)
            .fetch_optional(pool)
            .await
    }

    /// Count the enrollments in a roadmap.
    pub async fn count_by_roadmap(pool: &PgPool, roadmap_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE roadmap_id = $1")
            .bind(roadmap_id)
            .fetch_one(pool)
            .await
    }
}
