//! Typed data-access operations over the catalog.
//!
//! [`CatalogStore`] is the seam between the HTTP layer and persistence.
//! [`PgCatalogStore`] implements it over the repositories, converting every
//! `sqlx::Error` into a [`CoreError`]. Nothing in here logs failures; they
//! are returned to the caller.

use async_trait::async_trait;
use catalog_core::error::CoreError;
use catalog_core::project::ProjectInput;
use catalog_core::seed::SectorSeed;
use catalog_core::types::DbId;

use crate::models::project::{Project, ProjectWithSector};
use crate::models::sector::Sector;
use crate::repositories::{ProjectRepo, SectorRepo};
use crate::DbPool;

/// Create, read, update and delete operations on projects, plus sector reads.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Insert a project. The store assigns the id.
    async fn add_project(&self, input: &ProjectInput) -> Result<Project, CoreError>;

    async fn get_all_sectors(&self) -> Result<Vec<Sector>, CoreError>;

    async fn get_all_projects(&self) -> Result<Vec<ProjectWithSector>, CoreError>;

    /// `Ok(None)` when no project has this id.
    async fn get_project_by_id(&self, id: DbId) -> Result<Option<ProjectWithSector>, CoreError>;

    /// Projects whose sector name contains `fragment`, case-insensitively.
    /// An empty result is not an error.
    async fn get_projects_by_sector(
        &self,
        fragment: &str,
    ) -> Result<Vec<ProjectWithSector>, CoreError>;

    /// Replace every editable field of an existing project.
    async fn edit_project(&self, id: DbId, input: &ProjectInput) -> Result<Project, CoreError>;

    async fn delete_project(&self, id: DbId) -> Result<(), CoreError>;

    /// Whether the backing store currently answers.
    async fn is_healthy(&self) -> bool;
}

/// PostgreSQL-backed [`CatalogStore`].
#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Verify connectivity, apply migrations, and seed sectors if the table
    /// is empty. Returns the number of seeded sectors.
    ///
    /// Safe to call repeatedly; seeding never duplicates rows.
    pub async fn initialize(&self, seeds: &[SectorSeed]) -> Result<u64, CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(|e| CoreError::Connectivity(e.to_string()))?;

        crate::run_migrations(&self.pool)
            .await
            .map_err(|e| CoreError::Query(format!("Error applying migrations: {e}")))?;

        SectorRepo::seed_if_empty(&self.pool, seeds)
            .await
            .map_err(|e| classify(&e, "Error seeding sectors"))
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn add_project(&self, input: &ProjectInput) -> Result<Project, CoreError> {
        input.check()?;
        ProjectRepo::create(&self.pool, input)
            .await
            .map_err(|e| classify(&e, "Error adding project"))
    }

    async fn get_all_sectors(&self) -> Result<Vec<Sector>, CoreError> {
        SectorRepo::list(&self.pool)
            .await
            .map_err(|e| classify(&e, "Error fetching sectors"))
    }

    async fn get_all_projects(&self) -> Result<Vec<ProjectWithSector>, CoreError> {
        ProjectRepo::list(&self.pool)
            .await
            .map_err(|e| classify(&e, "Error fetching projects"))
    }

    async fn get_project_by_id(&self, id: DbId) -> Result<Option<ProjectWithSector>, CoreError> {
        ProjectRepo::find_by_id(&self.pool, id)
            .await
            .map_err(|e| classify(&e, "Unable to find requested project"))
    }

    async fn get_projects_by_sector(
        &self,
        fragment: &str,
    ) -> Result<Vec<ProjectWithSector>, CoreError> {
        ProjectRepo::list_by_sector_name(&self.pool, fragment)
            .await
            .map_err(|e| classify(&e, "Unable to find requested projects"))
    }

    async fn edit_project(&self, id: DbId, input: &ProjectInput) -> Result<Project, CoreError> {
        // A missing project is reported as such even when the input is invalid.
        let exists = ProjectRepo::exists(&self.pool, id)
            .await
            .map_err(|e| classify(&e, "Error updating project"))?;
        if !exists {
            return Err(CoreError::NotFound {
                entity: "Project",
                id,
            });
        }
        input.check()?;
        ProjectRepo::update(&self.pool, id, input)
            .await
            .map_err(|e| classify(&e, "Error updating project"))?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })
    }

    async fn delete_project(&self, id: DbId) -> Result<(), CoreError> {
        let deleted = ProjectRepo::delete(&self.pool, id)
            .await
            .map_err(|e| classify(&e, "Error deleting project"))?;
        if deleted {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "Project",
                id,
            })
        }
    }

    async fn is_healthy(&self) -> bool {
        crate::health_check(&self.pool).await.is_ok()
    }
}

/// Map a sqlx error onto the catalog error taxonomy.
///
/// - SQLSTATE class `22` (data exception) and `23` (integrity violation)
///   become [`CoreError::Validation`] carrying the database message.
/// - Transport and pool failures become [`CoreError::Connectivity`].
/// - Everything else becomes [`CoreError::Query`] prefixed with `context`.
pub fn classify(err: &sqlx::Error, context: &str) -> CoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            let is_constraint = db_err
                .code()
                .is_some_and(|code| code.starts_with("22") || code.starts_with("23"));
            if is_constraint {
                CoreError::Validation(db_err.message().to_string())
            } else {
                CoreError::Query(format!("{context}: {db_err}"))
            }
        }
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => CoreError::Connectivity(err.to_string()),
        other => CoreError::Query(format!("{context}: {other}")),
    }
}
