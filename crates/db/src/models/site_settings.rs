//! Site settings singleton model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::FromRow;

/// The single `site_settings` row (id pinned to 1).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSettings {
    pub id: DbId,
    pub site_title: String,
    pub tagline: String,
    pub founder_quote: String,
    pub contact_email: String,
    pub phone: String,
    pub address: String,
    pub instagram_url: String,
    pub twitter_url: String,
    pub linkedin_url: String,
    pub facebook_url: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub updated_at: Timestamp,
}

impl SiteSettings {
    /// Flat map of the four social URL fields, as exposed on the wire.
    pub fn social_links(&self) -> serde_json::Value {
        json!({
            "instagram": self.instagram_url,
            "twitter": self.twitter_url,
            "linkedin": self.linkedin_url,
            "facebook": self.facebook_url,
        })
    }
}

/// Response shape: the full row plus the assembled `social_links` map.
#[derive(Debug, Serialize)]
pub struct SiteSettingsResponse {
    #[serde(flatten)]
    pub settings: SiteSettings,
    pub social_links: serde_json::Value,
}

impl From<SiteSettings> for SiteSettingsResponse {
    fn from(settings: SiteSettings) -> Self {
        let social_links = settings.social_links();
        Self {
            settings,
            social_links,
        }
    }
}

/// DTO for updating the settings row. All fields are optional.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UpdateSiteSettings {
    pub site_title: Option<String>,
    pub tagline: Option<String>,
    pub founder_quote: Option<String>,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub instagram_url: Option<String>,
    pub twitter_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub facebook_url: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}
