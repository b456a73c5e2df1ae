//! Repository for the `site_settings` singleton.
//!
//! The row occupies a fixed identity (id 1). `load` is an idempotent
//! initialize-if-absent: concurrent first calls race on the primary key and
//! exactly one insert wins, so exactly one row ever exists. There is no
//! delete operation.

use sqlx::PgPool;

use crate::models::site_settings::{SiteSettings, UpdateSiteSettings};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, site_title, tagline, founder_quote, contact_email, phone, address, \
    instagram_url, twitter_url, linkedin_url, facebook_url, meta_description, meta_keywords, \
    updated_at";

/// Fixed identity of the singleton row.
const SINGLETON_ID: i64 = 1;

/// Provides load and update operations for the site settings singleton.
pub struct SiteSettingsRepo;

impl SiteSettingsRepo {
    /// Load the singleton row, creating it with defaults if absent.
    pub async fn load(pool: &PgPool) -> Result<SiteSettings, sqlx::Error> {
        sqlx::query("INSERT INTO site_settings (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(SINGLETON_ID)
            .execute(pool)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE id = $1");
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SINGLETON_ID)
            .fetch_one(pool)
            .await
    }

    /// Update the singleton row. Only non-`None` fields are applied. The row
    /// is created first if it does not exist yet.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateSiteSettings,
    ) -> Result<SiteSettings, sqlx::Error> {
        // Guarantee the row exists before patching it.
        Self::load(pool).await?;

        let query = format!(
            "UPDATE site_settings SET
                site_title = COALESCE($2, site_title),
                tagline = COALESCE($3, tagline),
                founder_quote = COALESCE($4, founder_quote),
                contact_email = COALESCE($5, contact_email),
                phone = COALESCE($6, phone),
                address = COALESCE($7, address),
                instagram_url = COALESCE($8, instagram_url),
                twitter_url = COALESCE($9, twitter_url),
                linkedin_url = COALESCE($10, linkedin_url),
                facebook_url = COALESCE($11, facebook_url),
                meta_description = COALESCE($12, meta_description),
                meta_keywords = COALESCE($13, meta_keywords),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SINGLETON_ID)
            .bind(&input.site_title)
            .bind(&input.tagline)
            .bind(&input.founder_quote)
            .bind(&input.contact_email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.instagram_url)
            .bind(&input.twitter_url)
            .bind(&input.linkedin_url)
            .bind(&input.facebook_url)
            .bind(&input.meta_description)
            .bind(&input.meta_keywords)
            .fetch_one(pool)
            .await
    }
}
