//! Repository for the `about_section` singleton.
//!
//! Same singleton contract as [`super::SiteSettingsRepo`]: fixed id 1,
//! idempotent load, no delete.

use sqlx::PgPool;

use crate::models::about_section::{AboutSection, UpdateAboutSection};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, team_image, team_caption, updated_at";

/// Fixed identity of the singleton row.
const SINGLETON_ID: i64 = 1;

/// Provides load and update operations for the about-section singleton.
pub struct AboutSectionRepo;

impl AboutSectionRepo {
    /// Load the singleton row, creating it with defaults if absent.
    pub async fn load(pool: &PgPool) -> Result<AboutSection, sqlx::Error> {
        sqlx::query("INSERT INTO about_section (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(SINGLETON_ID)
            .execute(pool)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM about_section WHERE id = $1");
        sqlx::query_as::<_, AboutSection>(&query)
            .bind(SINGLETON_ID)
            .fetch_one(pool)
            .await
    }

    /// Update the singleton row. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateAboutSection,
    ) -> Result<AboutSection, sqlx::Error> {
        Self::load(pool).await?;

        let query = format!(
            "UPDATE about_section SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                team_image = COALESCE($4, team_image),
                team_caption = COALESCE($5, team_caption),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AboutSection>(&query)
            .bind(SINGLETON_ID)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.team_image)
            .bind(&input.team_caption)
            .fetch_one(pool)
            .await
    }
}
