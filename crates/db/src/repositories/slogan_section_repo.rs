//! Repository for the `slogan_section` singleton.

use sqlx::PgPool;

use crate::models::slogan_section::{SloganSection, UpdateSloganSection};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, text, is_active, updated_at";

/// Fixed identity of the singleton row.
const SINGLETON_ID: i64 = 1;

/// Provides load and update operations for the slogan singleton.
pub struct SloganSectionRepo;

impl SloganSectionRepo {
    /// Load the singleton row, creating it with defaults if absent.
    pub async fn load(pool: &PgPool) -> Result<SloganSection, sqlx::Error> {
        sqlx::query("INSERT INTO slogan_section (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(SINGLETON_ID)
            .execute(pool)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM slogan_section WHERE id = $1");
        sqlx::query_as::<_, SloganSection>(&query)
            .bind(SINGLETON_ID)
            .fetch_one(pool)
            .await
    }

    /// Update the singleton row. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateSloganSection,
    ) -> Result<SloganSection, sqlx::Error> {
        Self::load(pool).await?;

        let query = format!(
            "UPDATE slogan_section SET
                text = COALESCE($2, text),
                is_active = COALESCE($3, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SloganSection>(&query)
            .bind(SINGLETON_ID)
            .bind(&input.text)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }
}
