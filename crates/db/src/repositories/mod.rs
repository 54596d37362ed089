//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that take the pool (or a connection, inside a transaction) first and
//! return raw `sqlx::Error`s.

pub mod project_repo;
pub mod sector_repo;

pub use project_repo::ProjectRepo;
pub use sector_repo::SectorRepo;
