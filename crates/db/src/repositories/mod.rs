//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Ownership-scoped methods
//! (`*_owned`) take the caller's user id and behave as if the row did not
//! exist when it belongs to someone else.

pub mod certificate_repo;
pub mod enrollment_repo;
pub mod ownership_mint_repo;
pub mod resource_repo;
pub mod roadmap_repo;
pub mod step_repo;
pub mod user_repo;

pub use certificate_repo::CertificateRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use ownership_mint_repo::OwnershipMintRepo;
pub use resource_repo::ResourceRepo;
pub use roadmap_repo::{RoadmapDeletion, RoadmapRepo};
pub use step_repo::StepRepo;
pub use user_repo::UserRepo;
