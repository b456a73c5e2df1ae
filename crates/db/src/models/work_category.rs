//! Work category entity model and DTOs.

use atelier_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A work category row from the `work_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkCategory {
    pub id: DbId,
    pub name: String,
    pub display_name: String,
    pub image: Option<String>,
    pub description: String,
    pub is_active: bool,
    pub display_order: i32,
}

/// A work category joined with a live count of its non-featured works.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkCategoryWithCount {
    pub id: DbId,
    pub name: String,
    pub display_name: String,
    pub image: Option<String>,
    pub description: String,
    pub is_active: bool,
    pub display_order: i32,
    pub works_count: i64,
}

/// DTO for creating a new work category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkCategory {
    pub name: String,
    pub display_name: String,
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

/// DTO for updating an existing work category. All fields are optional.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UpdateWorkCategory {
    pub display_name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}
