//! Repository for the `categories` table.

use atelier_core::ordering::Ordering;
use atelier_core::slug::resolve_slug;
use sqlx::PgPool;

use crate::models::category::{Category, CategoryWithCount, CreateCategory, UpdateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, description, created_at";

/// Column list for the project-count join, qualified with the table alias.
const COUNT_COLUMNS: &str = "c.id, c.name, c.slug, c.description, \
     (SELECT COUNT(*) FROM projects p WHERE p.category_id = c.id) AS project_count";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Columns clients may sort the list endpoint by.
    pub const ORDERABLE: &'static [&'static str] = &["name", "created_at"];

    /// Insert a new category, returning the created row.
    ///
    /// Derives the slug from `name` when the input omits one. A derived slug
    /// that collides with an existing one fails the unique constraint.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let slug = resolve_slug(input.slug.as_deref(), &input.name);
        let query = format!(
            "INSERT INTO categories (name, slug, description)
             VALUES ($1, $2, COALESCE($3, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&slug)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a category by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE slug = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by slug, joined with its live project count.
    pub async fn find_with_count(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<CategoryWithCount>, sqlx::Error> {
        let query = format!("SELECT {COUNT_COLUMNS} FROM categories c WHERE c.slug = $1");
        sqlx::query_as::<_, CategoryWithCount>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by id, joined with its live project count.
    pub async fn find_with_count_by_id(
        pool: &PgPool,
        id: i64,
    ) -> Result<Option<CategoryWithCount>, sqlx::Error> {
        let query = format!("SELECT {COUNT_COLUMNS} FROM categories c WHERE c.id = $1");
        sqlx::query_as::<_, CategoryWithCount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories with live project counts, ordered by name unless
    /// the caller requests another sortable column.
    pub async fn list(
        pool: &PgPool,
        order: Option<Ordering>,
    ) -> Result<Vec<CategoryWithCount>, sqlx::Error> {
        let order_by = match order {
            Some(o) => format!("c.{} {}", o.column, o.direction()),
            None => "c.name".to_string(),
        };
        let query = format!("SELECT {COUNT_COLUMNS} FROM categories c ORDER BY {order_by}");
        sqlx::query_as::<_, CategoryWithCount>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a category addressed by slug. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given slug exists.
    pub async fn update(
        pool: &PgPool,
        slug: &str,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description)
             WHERE slug = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(slug)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by slug. Dependent projects keep their rows with
    /// `category_id` cleared (ON DELETE SET NULL). Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE slug = $1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
