//! Domain types and pure validation logic for RoadmapDAO.
//!
//! Nothing in this crate touches the database or the network.

pub mod certificate;
pub mod error;
pub mod progress;
pub mod resource_type;
pub mod types;
pub mod wallet;
