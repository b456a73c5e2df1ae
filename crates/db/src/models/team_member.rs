//! Team member entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A team member row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: Option<String>,
    pub email: String,
    pub linkedin_url: String,
    pub website_url: String,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a new team member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub image: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub website_url: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

/// DTO for updating an existing team member. All fields are optional.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UpdateTeamMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub website_url: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}
