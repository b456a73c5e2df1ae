//! Hero slide entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A hero slide row from the `hero_slides` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroSlide {
    pub id: DbId,
    pub image: String,
    pub caption: String,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a new hero slide.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHeroSlide {
    pub image: String,
    pub caption: String,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

/// DTO for updating an existing hero slide. All fields are optional.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UpdateHeroSlide {
    pub image: Option<String>,
    pub caption: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}
