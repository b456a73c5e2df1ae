//! Repository for the `hero_slides` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::hero_slide::{CreateHeroSlide, HeroSlide, UpdateHeroSlide};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, image, caption, is_active, display_order, created_at";

/// Contract ordering: display_order, then recency.
const DEFAULT_ORDER: &str = "display_order, created_at DESC";

/// Provides CRUD operations for hero slides.
pub struct HeroSlideRepo;

impl HeroSlideRepo {
    /// Insert a new slide, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateHeroSlide) -> Result<HeroSlide, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_slides (image, caption, is_active, display_order)
             VALUES ($1, $2, COALESCE($3, TRUE), COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(&input.image)
            .bind(&input.caption)
            .bind(input.is_active)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a slide by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HeroSlide>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_slides WHERE id = $1");
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List slides in contract order; inactive slides only when requested.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<HeroSlide>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hero_slides
             WHERE (is_active OR $1)
             ORDER BY {DEFAULT_ORDER}"
        );
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update a slide. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHeroSlide,
    ) -> Result<Option<HeroSlide>, sqlx::Error> {
        let query = format!(
            "UPDATE hero_slides SET
                image = COALESCE($2, image),
                caption = COALESCE($3, caption),
                is_active = COALESCE($4, is_active),
                display_order = COALESCE($5, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(id)
            .bind(&input.image)
            .bind(&input.caption)
            .bind(input.is_active)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a slide by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hero_slides WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
