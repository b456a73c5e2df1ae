//! Repository for the `news_articles` table.
//!
//! All read queries take a `staff` flag: non-staff callers never observe
//! unpublished rows, enforced here at the query layer rather than in
//! response shaping.

use atelier_core::ordering::Ordering;
use atelier_core::slug::resolve_slug;
use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::news_article::{
    CreateNewsArticle, NewsArticle, NewsArticleSummary, UpdateNewsArticle,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, excerpt, content, featured_image, author_id, published, \
    publish_date, created_at, updated_at";

/// Summary columns with the author name resolved, for list queries.
const SUMMARY_COLUMNS: &str = "n.id, n.title, n.slug, n.excerpt, n.featured_image, \
    u.username AS author_name, n.publish_date, n.created_at";

/// Contract ordering for list endpoints: newest publish date first.
const DEFAULT_ORDER: &str = "n.publish_date DESC NULLS LAST, n.created_at DESC";

/// Provides CRUD and query operations for news articles.
pub struct NewsArticleRepo;

impl NewsArticleRepo {
    /// Columns clients may sort the list endpoint by.
    pub const ORDERABLE: &'static [&'static str] = &["publish_date", "created_at", "title"];

    /// Insert a new article authored by `author_id`, returning the created row.
    ///
    /// Derives the slug from `title` when the input omits one.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateNewsArticle,
    ) -> Result<NewsArticle, sqlx::Error> {
        let slug = resolve_slug(input.slug.as_deref(), &input.title);
        let query = format!(
            "INSERT INTO news_articles (title, slug, excerpt, content, featured_image,
                author_id, published, publish_date)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), $5, $6,
                COALESCE($7, FALSE), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsArticle>(&query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.featured_image)
            .bind(author_id)
            .bind(input.published)
            .bind(input.publish_date)
            .fetch_one(pool)
            .await
    }

    /// Find an article by slug; non-staff callers only see published rows.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
        staff: bool,
    ) -> Result<Option<NewsArticle>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM news_articles WHERE slug = $1 AND (published OR $2)");
        sqlx::query_as::<_, NewsArticle>(&query)
            .bind(slug)
            .bind(staff)
            .fetch_optional(pool)
            .await
    }

    /// Resolve the author's username for a detail response.
    pub async fn author_name(pool: &PgPool, author_id: DbId) -> Result<String, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE id = $1")
            .bind(author_id)
            .fetch_one(pool)
            .await
    }

    /// List article summaries in contract order unless the caller requests
    /// another sortable column; non-staff callers only see published rows.
    pub async fn list(
        pool: &PgPool,
        staff: bool,
        search: Option<&str>,
        order: Option<Ordering>,
    ) -> Result<Vec<NewsArticleSummary>, sqlx::Error> {
        let order_by = match order {
            Some(o) => format!("n.{} {}", o.column, o.direction()),
            None => DEFAULT_ORDER.to_string(),
        };
        let query = format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM news_articles n
             JOIN users u ON u.id = n.author_id
             WHERE (n.published OR $1)
               AND ($2::TEXT IS NULL
                    OR n.title ILIKE '%' || $2 || '%'
                    OR n.excerpt ILIKE '%' || $2 || '%'
                    OR n.content ILIKE '%' || $2 || '%')
             ORDER BY {order_by}"
        );
        sqlx::query_as::<_, NewsArticleSummary>(&query)
            .bind(staff)
            .bind(search)
            .fetch_all(pool)
            .await
    }

    /// List the `count` most recent article summaries visible to the caller.
    pub async fn latest(
        pool: &PgPool,
        staff: bool,
        count: i64,
    ) -> Result<Vec<NewsArticleSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM news_articles n
             JOIN users u ON u.id = n.author_id
             WHERE (n.published OR $1)
             ORDER BY {DEFAULT_ORDER}
             LIMIT $2"
        );
        sqlx::query_as::<_, NewsArticleSummary>(&query)
            .bind(staff)
            .bind(count)
            .fetch_all(pool)
            .await
    }

    /// Update an article addressed by slug. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given slug exists.
    pub async fn update(
        pool: &PgPool,
        slug: &str,
        input: &UpdateNewsArticle,
    ) -> Result<Option<NewsArticle>, sqlx::Error> {
        let query = format!(
            "UPDATE news_articles SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                excerpt = COALESCE($4, excerpt),
                content = COALESCE($5, content),
                featured_image = COALESCE($6, featured_image),
                published = COALESCE($7, published),
                publish_date = COALESCE($8, publish_date),
                updated_at = NOW()
             WHERE slug = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsArticle>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.featured_image)
            .bind(input.published)
            .bind(input.publish_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article by slug. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news_articles WHERE slug = $1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
