//! Repository for the `resources` table.

use roadmapdao_core::resource_type::ResourceType;
use roadmapdao_core::types::DbId;
use sqlx::PgPool;

use crate::models::resource::{CreateResource, Resource};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, step_id, title, description, resource_type, url, created_at, updated_at";

/// Provides CRUD operations for step resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// Attach a resource to a step whose parent roadmap is owned by `expert_id`.
    ///
    /// The ownership check and the insert are a single statement. Returns
    /// `None` if the step does not exist or is not owned.
    pub async fn create_in_owned_step(
        pool: &PgPool,
        step_id: DbId,
        expert_id: DbId,
        resource_type: ResourceType,
        input: &CreateResource,
    ) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources (step_id, title, description, resource_type, url)
             SELECT s.id, $3, $4, $5, $6
             FROM steps s
             JOIN roadmaps r ON r.id = s.roadmap_id
             WHERE s.id = $1 AND r.expert_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(step_id)
            .bind(expert_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(resource_type.as_str())
            .bind(&input.url)
            .fetch_optional(pool)
            .await
    }

    /// List the resources of the given steps, ascending by id.
    pub async fn list_by_steps(
        pool: &PgPool,
        step_ids: &[DbId],
    ) -> Result<Vec<Resource>, sqlx::Error> {
        if step_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM resources WHERE step_id = ANY($1) ORDER BY id ASC"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(step_ids)
            .fetch_all(pool)
            .await
    }

    /// List a single step's resources, ascending by id.
    pub async fn list_by_step(pool: &PgPool, step_id: DbId) -> Result<Vec<Resource>, sqlx::Error> {
        Self::list_by_steps(pool, &[step_id]).await
    }
}
