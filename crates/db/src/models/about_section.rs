//! About section singleton model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single `about_section` row (id pinned to 1).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AboutSection {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub team_image: Option<String>,
    pub team_caption: String,
    pub updated_at: Timestamp,
}

/// DTO for updating the about section. All fields are optional.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UpdateAboutSection {
    pub title: Option<String>,
    pub content: Option<String>,
    pub team_image: Option<String>,
    pub team_caption: Option<String>,
}
