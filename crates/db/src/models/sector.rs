//! Sector entity model.

use catalog_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `Sectors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Sector {
    pub id: DbId,
    pub sector_name: String,
}
