//! Repository for the `work_categories` table.
//!
//! Work categories are addressed by their enum-like `name` rather than slug
//! or id; the public site uses the name as the URL key.

use sqlx::PgPool;

use crate::models::work_category::{
    CreateWorkCategory, UpdateWorkCategory, WorkCategory, WorkCategoryWithCount,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, display_name, image, description, is_active, display_order";

/// Columns with the live works count joined in. Mirrors the public site's
/// listing, which counts only the non-featured works inside a category.
const COUNT_COLUMNS: &str = "wc.id, wc.name, wc.display_name, wc.image, wc.description, \
    wc.is_active, wc.display_order, \
    (SELECT COUNT(*) FROM works w WHERE w.category_id = wc.id AND NOT w.is_featured) AS works_count";

/// Provides CRUD operations for work categories.
pub struct WorkCategoryRepo;

impl WorkCategoryRepo {
    /// Insert a new work category, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWorkCategory,
    ) -> Result<WorkCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO work_categories (name, display_name, image, description, is_active,
                display_order)
             VALUES ($1, $2, $3, COALESCE($4, ''), COALESCE($5, TRUE), COALESCE($6, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkCategory>(&query)
            .bind(&input.name)
            .bind(&input.display_name)
            .bind(&input.image)
            .bind(&input.description)
            .bind(input.is_active)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a work category by its name key.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<WorkCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_categories WHERE name = $1");
        sqlx::query_as::<_, WorkCategory>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Find a work category by name, joined with its live works count.
    pub async fn find_with_count(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<WorkCategoryWithCount>, sqlx::Error> {
        let query = format!("SELECT {COUNT_COLUMNS} FROM work_categories wc WHERE wc.name = $1");
        sqlx::query_as::<_, WorkCategoryWithCount>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Find a work category by id, joined with its live works count.
    pub async fn find_with_count_by_id(
        pool: &PgPool,
        id: i64,
    ) -> Result<Option<WorkCategoryWithCount>, sqlx::Error> {
        let query = format!("SELECT {COUNT_COLUMNS} FROM work_categories wc WHERE wc.id = $1");
        sqlx::query_as::<_, WorkCategoryWithCount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List categories with works counts; inactive ones only when requested.
    /// Ordered by display_order, then display name.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<WorkCategoryWithCount>, sqlx::Error> {
        let query = format!(
            "SELECT {COUNT_COLUMNS} FROM work_categories wc
             WHERE (wc.is_active OR $1)
             ORDER BY wc.display_order, wc.display_name"
        );
        sqlx::query_as::<_, WorkCategoryWithCount>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update a category addressed by name. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given name exists.
    pub async fn update(
        pool: &PgPool,
        name: &str,
        input: &UpdateWorkCategory,
    ) -> Result<Option<WorkCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE work_categories SET
                display_name = COALESCE($2, display_name),
                image = COALESCE($3, image),
                description = COALESCE($4, description),
                is_active = COALESCE($5, is_active),
                display_order = COALESCE($6, display_order)
             WHERE name = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkCategory>(&query)
            .bind(name)
            .bind(&input.display_name)
            .bind(&input.image)
            .bind(&input.description)
            .bind(input.is_active)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by name. Dependent works are removed by the
    /// ON DELETE CASCADE constraint. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM work_categories WHERE name = $1")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
