//! Repository layer: one zero-sized struct per table with async query methods.

mod project_repo;

pub use project_repo::ProjectRepo;
