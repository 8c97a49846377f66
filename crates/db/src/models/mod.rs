//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Composite response shapes assembled from several queries, where needed
//! - `Deserialize` + `Validate` DTOs for inserts and patches

pub mod certificate;
pub mod enrollment;
pub mod ownership_mint;
pub mod resource;
pub mod roadmap;
pub mod step;
pub mod user;
