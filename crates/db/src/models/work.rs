//! Work entity model and DTOs.

use atelier_core::gallery::gallery_images;
use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::work_category::WorkCategoryWithCount;

/// A work row from the `works` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Work {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub category_id: DbId,
    pub featured_image: Option<String>,
    pub description: String,
    pub full_content: String,
    pub image_1: Option<String>,
    pub image_2: Option<String>,
    pub image_3: Option<String>,
    pub image_4: Option<String>,
    pub is_featured: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Work {
    /// Ordered non-empty gallery slot URLs.
    pub fn gallery(&self) -> Vec<String> {
        gallery_images([
            self.image_1.as_deref(),
            self.image_2.as_deref(),
            self.image_3.as_deref(),
            self.image_4.as_deref(),
        ])
    }
}

/// Reduced shape for list endpoints, with category names resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkSummary {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub category_name: String,
    pub category_slug: String,
    pub featured_image: Option<String>,
    pub description: String,
    pub is_featured: bool,
    pub created_at: Timestamp,
}

/// Full shape for detail endpoints, with derived fields attached.
#[derive(Debug, Serialize)]
pub struct WorkDetail {
    #[serde(flatten)]
    pub work: Work,
    pub gallery_images: Vec<String>,
    pub category: WorkCategoryWithCount,
    /// Up to 6 sibling works in the same category, excluding this one.
    pub related_works: Vec<WorkSummary>,
}

impl WorkDetail {
    pub fn new(work: Work, category: WorkCategoryWithCount, related_works: Vec<WorkSummary>) -> Self {
        let gallery_images = work.gallery();
        Self {
            work,
            gallery_images,
            category,
            related_works,
        }
    }
}

/// DTO for creating a new work.
///
/// When `slug` is omitted it is derived from `title`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWork {
    pub title: String,
    pub slug: Option<String>,
    pub category_id: DbId,
    pub featured_image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub full_content: Option<String>,
    pub image_1: Option<String>,
    pub image_2: Option<String>,
    pub image_3: Option<String>,
    pub image_4: Option<String>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i32>,
}

/// DTO for updating an existing work. All fields are optional.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UpdateWork {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category_id: Option<DbId>,
    pub featured_image: Option<String>,
    pub description: Option<String>,
    pub full_content: Option<String>,
    pub image_1: Option<String>,
    pub image_2: Option<String>,
    pub image_3: Option<String>,
    pub image_4: Option<String>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i32>,
}

/// Optional filters accepted by the work list endpoint.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct WorkFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub search: Option<String>,
}
