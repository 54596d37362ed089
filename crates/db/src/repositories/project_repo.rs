//! Repository for the `Projects` table.

use catalog_core::project::ProjectInput;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{Project, ProjectWithSector};

/// Columns of a bare project row. Legacy rows may hold NULL text.
const COLUMNS: &str = "id, \
     COALESCE(title, '') AS title, \
     COALESCE(feature_img_url, '') AS feature_img_url, \
     COALESCE(summary_short, '') AS summary_short, \
     COALESCE(intro_short, '') AS intro_short, \
     COALESCE(impact, '') AS impact, \
     COALESCE(original_source_url, '') AS original_source_url, \
     sector_id";

/// Columns of a project joined with its sector (`p` / `s` aliases).
const JOINED_COLUMNS: &str = "p.id, \
     COALESCE(p.title, '') AS title, \
     COALESCE(p.feature_img_url, '') AS feature_img_url, \
     COALESCE(p.summary_short, '') AS summary_short, \
     COALESCE(p.intro_short, '') AS intro_short, \
     COALESCE(p.impact, '') AS impact, \
     COALESCE(p.original_source_url, '') AS original_source_url, \
     p.sector_id, \
     s.id AS joined_sector_id, \
     s.sector_name AS joined_sector_name";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &ProjectInput) -> Result<Project, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO "Projects"
                (title, feature_img_url, summary_short, intro_short, impact,
                 original_source_url, sector_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.feature_img_url)
            .bind(&input.summary_short)
            .bind(&input.intro_short)
            .bind(&input.impact)
            .bind(&input.original_source_url)
            .bind(input.sector_id)
            .fetch_one(pool)
            .await
    }

    /// List all projects with their sectors, in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectWithSector>, sqlx::Error> {
        let query = format!(
            r#"SELECT {JOINED_COLUMNS}
             FROM "Projects" p
             LEFT JOIN "Sectors" s ON s.id = p.sector_id
             ORDER BY p.id"#
        );
        sqlx::query_as::<_, ProjectWithSector>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a project (with sector) by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectWithSector>, sqlx::Error> {
        let query = format!(
            r#"SELECT {JOINED_COLUMNS}
             FROM "Projects" p
             LEFT JOIN "Sectors" s ON s.id = p.sector_id
             WHERE p.id = $1"#
        );
        sqlx::query_as::<_, ProjectWithSector>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects whose sector name contains `fragment`, ignoring case.
    ///
    /// LIKE wildcards in `fragment` match literally.
    pub async fn list_by_sector_name(
        pool: &PgPool,
        fragment: &str,
    ) -> Result<Vec<ProjectWithSector>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(fragment));
        let query = format!(
            r#"SELECT {JOINED_COLUMNS}
             FROM "Projects" p
             JOIN "Sectors" s ON s.id = p.sector_id
             WHERE s.sector_name ILIKE $1 ESCAPE '\'
             ORDER BY p.id"#
        );
        sqlx::query_as::<_, ProjectWithSector>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM "Projects" WHERE id = $1)"#)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Replace every editable column of a project.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProjectInput,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            r#"UPDATE "Projects" SET
                title = $2,
                feature_img_url = $3,
                summary_short = $4,
                intro_short = $5,
                impact = $6,
                original_source_url = $7,
                sector_id = $8
             WHERE id = $1
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.feature_img_url)
            .bind(&input.summary_short)
            .bind(&input.intro_short)
            .bind(&input.impact)
            .bind(&input.original_source_url)
            .bind(input.sector_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM "Projects" WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape `\`, `%` and `_` for use inside an `ILIKE ... ESCAPE '\'` pattern.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_leaves_plain_text_alone() {
        assert_eq!(escape_like("Engineering"), "Engineering");
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }
}
