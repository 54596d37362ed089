//! Project entity models.

use catalog_core::types::DbId;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use crate::models::sector::Sector;

/// A row from the `Projects` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub feature_img_url: String,
    pub summary_short: String,
    pub intro_short: String,
    pub impact: String,
    pub original_source_url: String,
    pub sector_id: Option<DbId>,
}

/// A project with its sector joined in.
///
/// `sector` is `None` when `sector_id` is unset or points at no row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectWithSector {
    #[serde(flatten)]
    pub project: Project,
    pub sector: Option<Sector>,
}

impl ProjectWithSector {
    /// Sector name for display, empty when there is none.
    pub fn sector_name(&self) -> &str {
        self.sector
            .as_ref()
            .map(|s| s.sector_name.as_str())
            .unwrap_or("")
    }
}

impl<'r> FromRow<'r, PgRow> for ProjectWithSector {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let project = Project::from_row(row)?;
        let joined_id: Option<DbId> = row.try_get("joined_sector_id")?;
        let joined_name: Option<String> = row.try_get("joined_sector_name")?;
        let sector = joined_id.map(|id| Sector {
            id,
            sector_name: joined_name.unwrap_or_default(),
        });
        Ok(Self { project, sector })
    }
}
