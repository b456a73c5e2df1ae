//! News article entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A news article row from the `news_articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsArticle {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub author_id: DbId,
    pub published: bool,
    pub publish_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Reduced shape for list endpoints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsArticleSummary {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub author_name: String,
    pub publish_date: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Full shape for detail endpoints, with the author name resolved.
#[derive(Debug, Serialize)]
pub struct NewsArticleDetail {
    #[serde(flatten)]
    pub article: NewsArticle,
    pub author_name: String,
}

/// DTO for creating a new article. The author is always the calling user,
/// never part of the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNewsArticle {
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    pub featured_image: Option<String>,
    pub published: Option<bool>,
    pub publish_date: Option<Timestamp>,
}

/// DTO for updating an existing article. All fields are optional.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UpdateNewsArticle {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<String>,
    pub published: Option<bool>,
    pub publish_date: Option<Timestamp>,
}
