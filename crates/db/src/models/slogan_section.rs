//! Slogan section singleton model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single `slogan_section` row (id pinned to 1).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SloganSection {
    pub id: DbId,
    pub text: String,
    pub is_active: bool,
    pub updated_at: Timestamp,
}

/// DTO for updating the slogan section. All fields are optional.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UpdateSloganSection {
    pub text: Option<String>,
    pub is_active: Option<bool>,
}
