//! Repository for the `projects` table.

use atelier_core::ordering::Ordering;
use atelier_core::slug::resolve_slug;
use sqlx::PgPool;

use crate::models::project::{
    CreateProject, Project, ProjectFilter, ProjectSummary, UpdateProject,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, description, full_content, project_type, category_id, \
    featured_image, image_1, image_2, image_3, image_4, video_url, featured, display_order, \
    created_at, updated_at";

/// Summary columns with the category name resolved, for list queries.
const SUMMARY_COLUMNS: &str = "p.id, p.title, p.slug, p.description, p.project_type, \
    c.name AS category_name, p.featured_image, p.featured, p.display_order, p.created_at";

/// Contract ordering for list endpoints: display_order, then recency.
const DEFAULT_ORDER: &str = "p.display_order, p.created_at DESC";

/// Provides CRUD and query operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Columns clients may sort the list endpoint by.
    pub const ORDERABLE: &'static [&'static str] = &["display_order", "created_at", "title"];

    /// Insert a new project, returning the created row.
    ///
    /// Derives the slug from `title` when the input omits one.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let slug = resolve_slug(input.slug.as_deref(), &input.title);
        let query = format!(
            "INSERT INTO projects (title, slug, description, full_content, project_type,
                category_id, featured_image, image_1, image_2, image_3, image_4, video_url,
                featured, display_order)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), $5, $6, $7, $8, $9, $10, $11,
                COALESCE($12, ''), COALESCE($13, FALSE), COALESCE($14, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.description)
            .bind(&input.full_content)
            .bind(&input.project_type)
            .bind(input.category_id)
            .bind(&input.featured_image)
            .bind(&input.image_1)
            .bind(&input.image_2)
            .bind(&input.image_3)
            .bind(&input.image_4)
            .bind(&input.video_url)
            .bind(input.featured)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List project summaries with optional filters, in contract order unless
    /// the caller requests another sortable column.
    ///
    /// `search` matches title, description, and full content
    /// case-insensitively.
    pub async fn list(
        pool: &PgPool,
        filter: &ProjectFilter,
        order: Option<Ordering>,
    ) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        let order_by = match order {
            Some(o) => format!("p.{} {}", o.column, o.direction()),
            None => DEFAULT_ORDER.to_string(),
        };
        let query = format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM projects p
             LEFT JOIN categories c ON c.id = p.category_id
             WHERE ($1::TEXT IS NULL OR p.project_type = $1)
               AND ($2::TEXT IS NULL OR c.slug = $2)
               AND ($3::BOOLEAN IS NULL OR p.featured = $3)
               AND ($4::TEXT IS NULL
                    OR p.title ILIKE '%' || $4 || '%'
                    OR p.description ILIKE '%' || $4 || '%'
                    OR p.full_content ILIKE '%' || $4 || '%')
             ORDER BY {order_by}"
        );
        sqlx::query_as::<_, ProjectSummary>(&query)
            .bind(&filter.project_type)
            .bind(&filter.category)
            .bind(filter.featured)
            .bind(&filter.search)
            .fetch_all(pool)
            .await
    }

    /// List summaries of featured projects, in contract order.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM projects p
             LEFT JOIN categories c ON c.id = p.category_id
             WHERE p.featured
             ORDER BY {DEFAULT_ORDER}"
        );
        sqlx::query_as::<_, ProjectSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// List summaries of projects with the given type, in contract order.
    pub async fn list_by_type(
        pool: &PgPool,
        project_type: &str,
    ) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM projects p
             LEFT JOIN categories c ON c.id = p.category_id
             WHERE p.project_type = $1
             ORDER BY {DEFAULT_ORDER}"
        );
        sqlx::query_as::<_, ProjectSummary>(&query)
            .bind(project_type)
            .fetch_all(pool)
            .await
    }

    /// Update a project addressed by slug. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given slug exists.
    pub async fn update(
        pool: &PgPool,
        slug: &str,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                full_content = COALESCE($5, full_content),
                project_type = COALESCE($6, project_type),
                category_id = COALESCE($7, category_id),
                featured_image = COALESCE($8, featured_image),
                image_1 = COALESCE($9, image_1),
                image_2 = COALESCE($10, image_2),
                image_3 = COALESCE($11, image_3),
                image_4 = COALESCE($12, image_4),
                video_url = COALESCE($13, video_url),
                featured = COALESCE($14, featured),
                display_order = COALESCE($15, display_order),
                updated_at = NOW()
             WHERE slug = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.full_content)
            .bind(&input.project_type)
            .bind(input.category_id)
            .bind(&input.featured_image)
            .bind(&input.image_1)
            .bind(&input.image_2)
            .bind(&input.image_3)
            .bind(&input.image_4)
            .bind(&input.video_url)
            .bind(input.featured)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by slug. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE slug = $1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
