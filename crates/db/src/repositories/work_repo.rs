//! Repository for the `works` table.

use atelier_core::content::RELATED_WORKS_LIMIT;
use atelier_core::ordering::Ordering;
use atelier_core::slug::resolve_slug;
use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::work::{CreateWork, UpdateWork, Work, WorkFilter, WorkSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, category_id, featured_image, description, full_content, \
    image_1, image_2, image_3, image_4, is_featured, display_order, created_at, updated_at";

/// Summary columns with category names resolved, for list queries.
const SUMMARY_COLUMNS: &str = "w.id, w.title, w.slug, wc.display_name AS category_name, \
    wc.name AS category_slug, w.featured_image, w.description, w.is_featured, w.created_at";

/// Contract ordering for list endpoints: display_order, then recency.
const DEFAULT_ORDER: &str = "w.display_order, w.created_at DESC";

/// Provides CRUD and query operations for works.
pub struct WorkRepo;

impl WorkRepo {
    /// Columns clients may sort the list endpoint by.
    pub const ORDERABLE: &'static [&'static str] = &["display_order", "created_at"];

    /// Insert a new work, returning the created row.
    ///
    /// Derives the slug from `title` when the input omits one.
    pub async fn create(pool: &PgPool, input: &CreateWork) -> Result<Work, sqlx::Error> {
        let slug = resolve_slug(input.slug.as_deref(), &input.title);
        let query = format!(
            "INSERT INTO works (title, slug, category_id, featured_image, description,
                full_content, image_1, image_2, image_3, image_4, is_featured, display_order)
             VALUES ($1, $2, $3, $4, COALESCE($5, ''), COALESCE($6, ''), $7, $8, $9, $10,
                COALESCE($11, FALSE), COALESCE($12, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(&input.title)
            .bind(&slug)
            .bind(input.category_id)
            .bind(&input.featured_image)
            .bind(&input.description)
            .bind(&input.full_content)
            .bind(&input.image_1)
            .bind(&input.image_2)
            .bind(&input.image_3)
            .bind(&input.image_4)
            .bind(input.is_featured)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a work by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM works WHERE slug = $1");
        sqlx::query_as::<_, Work>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List work summaries with optional filters, in contract order unless
    /// the caller requests another sortable column.
    pub async fn list(
        pool: &PgPool,
        filter: &WorkFilter,
        order: Option<Ordering>,
    ) -> Result<Vec<WorkSummary>, sqlx::Error> {
        let order_by = match order {
            Some(o) => format!("w.{} {}", o.column, o.direction()),
            None => DEFAULT_ORDER.to_string(),
        };
        let query = format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM works w
             JOIN work_categories wc ON wc.id = w.category_id
             WHERE ($1::TEXT IS NULL OR wc.name = $1)
               AND ($2::BOOLEAN IS NULL OR w.is_featured = $2)
               AND ($3::TEXT IS NULL
                    OR w.title ILIKE '%' || $3 || '%'
                    OR w.description ILIKE '%' || $3 || '%')
             ORDER BY {order_by}"
        );
        sqlx::query_as::<_, WorkSummary>(&query)
            .bind(&filter.category)
            .bind(filter.featured)
            .bind(&filter.search)
            .fetch_all(pool)
            .await
    }

    /// List summaries of featured works, in contract order.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<WorkSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM works w
             JOIN work_categories wc ON wc.id = w.category_id
             WHERE w.is_featured
             ORDER BY {DEFAULT_ORDER}"
        );
        sqlx::query_as::<_, WorkSummary>(&query).fetch_all(pool).await
    }

    /// List summaries of works in the named category, in contract order.
    pub async fn list_by_category(
        pool: &PgPool,
        category_name: &str,
    ) -> Result<Vec<WorkSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM works w
             JOIN work_categories wc ON wc.id = w.category_id
             WHERE wc.name = $1
             ORDER BY {DEFAULT_ORDER}"
        );
        sqlx::query_as::<_, WorkSummary>(&query)
            .bind(category_name)
            .fetch_all(pool)
            .await
    }

    /// Sibling works in the same category, excluding `exclude_id`, capped at
    /// the related-works limit.
    pub async fn related(
        pool: &PgPool,
        category_id: DbId,
        exclude_id: DbId,
    ) -> Result<Vec<WorkSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM works w
             JOIN work_categories wc ON wc.id = w.category_id
             WHERE w.category_id = $1 AND w.id <> $2
             ORDER BY {DEFAULT_ORDER}
             LIMIT $3"
        );
        sqlx::query_as::<_, WorkSummary>(&query)
            .bind(category_id)
            .bind(exclude_id)
            .bind(RELATED_WORKS_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Update a work addressed by slug. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given slug exists.
    pub async fn update(
        pool: &PgPool,
        slug: &str,
        input: &UpdateWork,
    ) -> Result<Option<Work>, sqlx::Error> {
        let query = format!(
            "UPDATE works SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                category_id = COALESCE($4, category_id),
                featured_image = COALESCE($5, featured_image),
                description = COALESCE($6, description),
                full_content = COALESCE($7, full_content),
                image_1 = COALESCE($8, image_1),
                image_2 = COALESCE($9, image_2),
                image_3 = COALESCE($10, image_3),
                image_4 = COALESCE($11, image_4),
                is_featured = COALESCE($12, is_featured),
                display_order = COALESCE($13, display_order),
                updated_at = NOW()
             WHERE slug = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(input.category_id)
            .bind(&input.featured_image)
            .bind(&input.description)
            .bind(&input.full_content)
            .bind(&input.image_1)
            .bind(&input.image_2)
            .bind(&input.image_3)
            .bind(&input.image_4)
            .bind(input.is_featured)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a work by slug. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM works WHERE slug = $1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
