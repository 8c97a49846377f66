pub mod catalog;
pub mod certificate;
pub mod enrollment;
pub mod resource;
pub mod roadmap;
pub mod step;
