//! Resource entity model and DTOs.

use roadmapdao_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `resources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resource {
    pub id: DbId,
    pub step_id: DbId,
    pub title: String,
    pub description: String,
    /// One of the `ResourceType` names, e.g. `"VIDEO"`.
    #[serde(rename = "type")]
    pub resource_type: String,
    pub url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching a resource to a step.
///
/// `resource_type` is kept as a string here and parsed into
/// `ResourceType` by the handler so an unknown type is a 400, not a JSON
/// rejection.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateResource {
    #[serde(default)]
    #[validate(length(min = 1, message = "Resource title, description, type, and URL are required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Resource title, description, type, and URL are required"))]
    pub description: String,
    #[serde(default, rename = "type")]
    #[validate(length(min = 1, message = "Resource title, description, type, and URL are required"))]
    pub resource_type: String,
    #[serde(default)]
    #[validate(url(message = "Resource URL must be a valid URL"))]
    pub url: String,
}
