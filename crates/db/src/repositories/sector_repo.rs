//! Repository for the `Sectors` table.

use catalog_core::seed::SectorSeed;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use crate::models::sector::Sector;

const COLUMNS: &str = "id, COALESCE(sector_name, '') AS sector_name";

/// Read access plus the one-off bulk insert used for seeding.
pub struct SectorRepo;

impl SectorRepo {
    /// List all sectors in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Sector>, sqlx::Error> {
        let query = format!(r#"SELECT {COLUMNS} FROM "Sectors" ORDER BY id"#);
        sqlx::query_as::<_, Sector>(&query).fetch_all(pool).await
    }

    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "Sectors""#)
            .fetch_one(conn)
            .await?;
        Ok(count)
    }

    /// Insert all seeds in one statement. Returns the number of rows written.
    pub async fn insert_many(
        conn: &mut PgConnection,
        seeds: &[SectorSeed],
    ) -> Result<u64, sqlx::Error> {
        if seeds.is_empty() {
            return Ok(0);
        }
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(r#"INSERT INTO "Sectors" (sector_name) "#);
        builder.push_values(seeds, |mut row, seed| {
            row.push_bind(&seed.sector_name);
        });
        let result = builder.build().execute(conn).await?;
        Ok(result.rows_affected())
    }

    /// Seed the table if, and only if, it is empty.
    ///
    /// Runs under an exclusive table lock so concurrent starts cannot both
    /// see an empty table.
    pub async fn seed_if_empty(pool: &PgPool, seeds: &[SectorSeed]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query(r#"LOCK TABLE "Sectors" IN EXCLUSIVE MODE"#)
            .execute(&mut *tx)
            .await?;

        let existing = Self::count(&mut tx).await?;
        if existing > 0 {
            tracing::debug!(existing, "Sectors already present, skipping seed");
            tx.commit().await?;
            return Ok(0);
        }

        let inserted = Self::insert_many(&mut tx, seeds).await?;
        tx.commit().await?;
        Ok(inserted)
    }
}
