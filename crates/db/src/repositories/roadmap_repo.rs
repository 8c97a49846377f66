//! Repository for the `roadmaps` table.

use std::collections::HashMap;

use roadmapdao_core::types::DbId;
use sqlx::PgPool;

use crate::models::resource::Resource;
use crate::models::roadmap::{
    CreateRoadmap, Roadmap, RoadmapDetail, RoadmapSummary, RoadmapSummaryRow, UpdateRoadmap,
};
use crate::models::step::StepWithResources;
use crate::models::user::ExpertIdentity;
use crate::repositories::{ResourceRepo, StepRepo, UserRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, expert_id, title, description, created_at, updated_at";

/// Listing projection: roadmap, author wallet, and aggregate counts.
const SUMMARY_SELECT: &str = "SELECT r.id, r.expert_id, u.wallet_address AS expert_wallet_address, \
        r.title, r.description, \
        (SELECT COUNT(*) FROM steps s WHERE s.roadmap_id = r.id) AS step_count, \
        (SELECT COUNT(*) FROM enrollments e WHERE e.roadmap_id = r.id) AS enrollment_count, \
        r.created_at, r.updated_at \
     FROM roadmaps r \
     JOIN users u ON u.id = r.expert_id";

/// Result of an ownership-scoped delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadmapDeletion {
    Deleted,
    /// No roadmap with that id is owned by the caller.
    NotFound,
    /// Learners are enrolled; the roadmap was left in place.
    HasEnrollments(i64),
}

/// Provides CRUD operations for roadmaps.
pub struct RoadmapRepo;

impl RoadmapRepo {
    /// Insert a roadmap owned by `expert_id`.
    pub async fn create(
        pool: &PgPool,
        expert_id: DbId,
        input: &CreateRoadmap,
    ) -> Result<Roadmap, sqlx::Error> {
        let query = format!(
            "INSERT INTO roadmaps (expert_id, title, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Roadmap>(&query)
            .bind(expert_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a roadmap by ID regardless of owner.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Roadmap>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roadmaps WHERE id = $1");
        sqlx::query_as::<_, Roadmap>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a roadmap by ID only if `expert_id` owns it.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        expert_id: DbId,
    ) -> Result<Option<Roadmap>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roadmaps WHERE id = $1 AND expert_id = $2");
        sqlx::query_as::<_, Roadmap>(&query)
            .bind(id)
            .bind(expert_id)
            .fetch_optional(pool)
            .await
    }

    /// List every roadmap, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<RoadmapSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} ORDER BY r.created_at DESC, r.id DESC");
        let rows = sqlx::query_as::<_, RoadmapSummaryRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(RoadmapSummary::from).collect())
    }

    /// List the roadmaps owned by `expert_id`, newest first.
    pub async fn list_by_expert(
        pool: &PgPool,
        expert_id: DbId,
    ) -> Result<Vec<RoadmapSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} WHERE r.expert_id = $1 ORDER BY r.created_at DESC, r.id DESC"
        );
        let rows = sqlx::query_as::<_, RoadmapSummaryRow>(&query)
            .bind(expert_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(RoadmapSummary::from).collect())
    }

    /// Load a roadmap with its author, steps, and resources.
    ///
    /// With `owner = Some(expert_id)` the lookup is ownership-scoped.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
        owner: Option<DbId>,
    ) -> Result<Option<RoadmapDetail>, sqlx::Error> {
        let roadmap = match owner {
            Some(expert_id) => Self::find_owned(pool, id, expert_id).await?,
            None => Self::find_by_id(pool, id).await?,
        };
        let Some(roadmap) = roadmap else {
            return Ok(None);
        };

        let expert = UserRepo::find_by_id(pool, roadmap.expert_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        let enrollment_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE roadmap_id = $1")
                .bind(roadmap.id)
                .fetch_one(pool)
                .await?;

        let steps = StepRepo::list_by_roadmap(pool, roadmap.id).await?;
        let step_ids: Vec<DbId> = steps.iter().map(|s| s.id).collect();
        let mut by_step: HashMap<DbId, Vec<Resource>> = HashMap::new();
        for resource in ResourceRepo::list_by_steps(pool, &step_ids).await? {
            by_step.entry(resource.step_id).or_default().push(resource);
        }

        let steps = steps
            .into_iter()
            .map(|step| {
                let resources = by_step.remove(&step.id).unwrap_or_default();
                StepWithResources { step, resources }
            })
            .collect();

        Ok(Some(RoadmapDetail {
            roadmap,
            expert: ExpertIdentity {
                id: expert.id,
                wallet_address: expert.wallet_address,
            },
            enrollment_count,
            steps,
        }))
    }

    /// Update a roadmap owned by `expert_id`. Only non-`None` fields are applied.
    ///
    /// Returns `None` if the roadmap does not exist or is not owned.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        expert_id: DbId,
        input: &UpdateRoadmap,
    ) -> Result<Option<Roadmap>, sqlx::Error> {
        let query = format!(
            "UPDATE roadmaps SET
                title = COALESCE($3, title),
                description = COALESCE($4, description)
             WHERE id = $1 AND expert_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Roadmap>(&query)
            .bind(id)
            .bind(expert_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a roadmap owned by `expert_id`, cascading its steps and resources.
    ///
    /// The roadmap row is locked first, so an enrollment racing the delete
    /// either commits before the count (and blocks it) or fails its FK check.
    pub async fn delete_owned(
        pool: &PgPool,
        id: DbId,
        expert_id: DbId,
    ) -> Result<RoadmapDeletion, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> = sqlx::query_scalar(
            "SELECT id FROM roadmaps WHERE id = $1 AND expert_id = $2 FOR UPDATE",
        )
        .bind(id)
        .bind(expert_id)
        .fetch_optional(&mut *tx)
        .await?;
        if locked.is_none() {
            return Ok(RoadmapDeletion::NotFound);
        }

        let enrollments: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE roadmap_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if enrollments > 0 {
            return Ok(RoadmapDeletion::HasEnrollments(enrollments));
        }

        sqlx::query("DELETE FROM roadmaps WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(RoadmapDeletion::Deleted)
    }
}
