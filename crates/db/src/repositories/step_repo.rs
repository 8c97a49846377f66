//! Repository for the `steps` table.

use roadmapdao_core::types::DbId;
use sqlx::PgPool;

use crate::models::step::{CreateStep, Step, UpdateStep};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, roadmap_id, title, description, step_order, created_at, updated_at";

/// Same columns qualified with the `s` alias, for joins against `roadmaps`.
const S_COLUMNS: &str = "s.id, s.roadmap_id, s.title, s.description, s.step_order, \
    s.created_at, s.updated_at";

/// Provides CRUD operations for roadmap steps.
pub struct StepRepo;

impl StepRepo {
    /// Append a step to a roadmap owned by `expert_id`.
    ///
    /// The step's order is one past the highest existing order (0 for the
    /// first step), which equals the current step count while no step has
    /// been deleted. The roadmap row is locked for the duration so
    /// concurrent appends serialise instead of colliding on
    /// `uq_steps_roadmap_order`.
    ///
    /// Returns `None` if the roadmap does not exist or is not owned.
    pub async fn create_in_owned_roadmap(
        pool: &PgPool,
        roadmap_id: DbId,
        expert_id: DbId,
        input: &CreateStep,
    ) -> Result<Option<Step>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> = sqlx::query_scalar(
            "SELECT id FROM roadmaps WHERE id = $1 AND expert_id = $2 FOR UPDATE",
        )
        .bind(roadmap_id)
        .bind(expert_id)
        .fetch_optional(&mut *tx)
        .await?;
        if locked.is_none() {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO steps (roadmap_id, title, description, step_order)
             VALUES ($1, $2, $3,
                 (SELECT COALESCE(MAX(step_order) + 1, 0) FROM steps WHERE roadmap_id = $1))
             RETURNING {COLUMNS}"
        );
        let step = sqlx::query_as::<_, Step>(&query)
            .bind(roadmap_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(step))
    }

    /// List a roadmap's steps in ascending order.
    pub async fn list_by_roadmap(pool: &PgPool, roadmap_id: DbId) -> Result<Vec<Step>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM steps WHERE roadmap_id = $1 ORDER BY step_order ASC, id ASC"
        );
        sqlx::query_as::<_, Step>(&query)
            .bind(roadmap_id)
            .fetch_all(pool)
            .await
    }

    /// Update a step whose parent roadmap is owned by `expert_id`.
    /// Only non-`None` fields are applied; the order never changes.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        expert_id: DbId,
        input: &UpdateStep,
    ) -> Result<Option<Step>, sqlx::Error> {
        let query = format!(
            "UPDATE steps s SET
                title = COALESCE($3, s.title),
                description = COALESCE($4, s.description)
             FROM roadmaps r
             WHERE s.id = $1 AND r.id = s.roadmap_id AND r.expert_id = $2
             RETURNING {S_COLUMNS}"
        );
        sqlx::query_as::<_, Step>(&query)
            .bind(id)
            .bind(expert_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a step (and its resources) whose parent roadmap is owned by
    /// `expert_id`. Returns `true` if a row was removed. Remaining steps keep
    /// their order values.
    pub async fn delete_owned(pool: &PgPool, id: DbId, expert_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM steps s
             USING roadmaps r
             WHERE s.id = $1 AND r.id = s.roadmap_id AND r.expert_id = $2",
        )
        .bind(id)
        .bind(expert_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
