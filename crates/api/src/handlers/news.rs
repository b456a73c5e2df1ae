//! Handlers for the `/news` resource. Lookup key is the slug.
//!
//! Visibility rule: anonymous and non-staff callers only ever see published
//! articles. The filter is applied inside the repository queries so an
//! unpublished slug behaves exactly like a missing one (404).

use atelier_core::content::clamp_latest_count;
use atelier_core::error::CoreError;
use atelier_db::models::news_article::{
    CreateNewsArticle, NewsArticle, NewsArticleDetail, NewsArticleSummary, UpdateNewsArticle,
};
use atelier_db::repositories::NewsArticleRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::OptionalAuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::query::{CountParams, OrderingParams, SearchParams};
use crate::state::AppState;

/// GET /api/v1/news
///
/// Supports `?search=` plus `?ordering=` over publish_date, created_at,
/// and title.
pub async fn list(
    caller: OptionalAuthUser,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    Query(order_params): Query<OrderingParams>,
) -> AppResult<Json<Vec<NewsArticleSummary>>> {
    let order = order_params.resolve(NewsArticleRepo::ORDERABLE)?;
    let articles =
        NewsArticleRepo::list(&state.pool, caller.is_staff(), params.search.as_deref(), order)
            .await?;
    Ok(Json(articles))
}

/// GET /api/v1/news/latest?count=N
///
/// `count` defaults to 3 and is clamped into `1..=20`.
pub async fn latest(
    caller: OptionalAuthUser,
    State(state): State<AppState>,
    Query(params): Query<CountParams>,
) -> AppResult<Json<Vec<NewsArticleSummary>>> {
    let count = clamp_latest_count(params.count);
    let articles = NewsArticleRepo::latest(&state.pool, caller.is_staff(), count).await?;
    Ok(Json(articles))
}

/// POST /api/v1/news
///
/// The author is always the calling staff user; it is never read from the
/// payload.
pub async fn create(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateNewsArticle>,
) -> AppResult<(StatusCode, Json<NewsArticle>)> {
    let article = NewsArticleRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// GET /api/v1/news/{slug}
pub async fn get_by_slug(
    caller: OptionalAuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<NewsArticleDetail>> {
    let article = NewsArticleRepo::find_by_slug(&state.pool, &slug, caller.is_staff())
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "NewsArticle",
                key: slug,
            })
        })?;

    let author_name = NewsArticleRepo::author_name(&state.pool, article.author_id).await?;

    Ok(Json(NewsArticleDetail {
        article,
        author_name,
    }))
}

/// PUT /api/v1/news/{slug}
pub async fn update(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdateNewsArticle>,
) -> AppResult<Json<NewsArticle>> {
    let article = NewsArticleRepo::update(&state.pool, &slug, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "NewsArticle",
                key: slug,
            })
        })?;
    Ok(Json(article))
}

/// DELETE /api/v1/news/{slug}
pub async fn delete(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = NewsArticleRepo::delete(&state.pool, &slug).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFoundByKey {
            entity: "NewsArticle",
            key: slug,
        }))
    }
}
