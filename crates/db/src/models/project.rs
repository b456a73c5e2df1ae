//! Project entity model and DTOs.

use atelier_core::gallery::gallery_images;
use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::category::CategoryWithCount;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub full_content: String,
    pub project_type: String,
    pub category_id: Option<DbId>,
    pub featured_image: Option<String>,
    pub image_1: Option<String>,
    pub image_2: Option<String>,
    pub image_3: Option<String>,
    pub image_4: Option<String>,
    pub video_url: String,
    pub featured: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
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

/// Reduced shape for list endpoints: no heavy text or gallery slots.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub project_type: String,
    pub category_name: Option<String>,
    pub featured_image: Option<String>,
    pub featured: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
}

/// Full shape for detail endpoints, with derived fields attached.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub gallery_images: Vec<String>,
    pub category: Option<CategoryWithCount>,
}

impl ProjectDetail {
    pub fn new(project: Project, category: Option<CategoryWithCount>) -> Self {
        let gallery_images = project.gallery();
        Self {
            project,
            gallery_images,
            category,
        }
    }
}

/// DTO for creating a new project.
///
/// When `slug` is omitted it is derived from `title`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub full_content: Option<String>,
    pub project_type: String,
    pub category_id: Option<DbId>,
    pub featured_image: Option<String>,
    pub image_1: Option<String>,
    pub image_2: Option<String>,
    pub image_3: Option<String>,
    pub image_4: Option<String>,
    pub video_url: Option<String>,
    pub featured: Option<bool>,
    pub display_order: Option<i32>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub full_content: Option<String>,
    pub project_type: Option<String>,
    pub category_id: Option<DbId>,
    pub featured_image: Option<String>,
    pub image_1: Option<String>,
    pub image_2: Option<String>,
    pub image_3: Option<String>,
    pub image_4: Option<String>,
    pub video_url: Option<String>,
    pub featured: Option<bool>,
    pub display_order: Option<i32>,
}

/// Optional filters accepted by the project list endpoint.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProjectFilter {
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub search: Option<String>,
}
