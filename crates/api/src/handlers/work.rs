//! Handlers for the `/works` resource. Lookup key is the slug.

use atelier_core::error::CoreError;
use atelier_db::models::work::{
    CreateWork, UpdateWork, Work, WorkDetail, WorkFilter, WorkSummary,
};
use atelier_db::repositories::{WorkCategoryRepo, WorkRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::query::{CategoryParams, OrderingParams};
use crate::state::AppState;

/// GET /api/v1/works
///
/// Supports `?category=`, `?featured=`, and `?search=` filters, plus
/// `?ordering=` over display_order and created_at.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<WorkFilter>,
    Query(order_params): Query<OrderingParams>,
) -> AppResult<Json<Vec<WorkSummary>>> {
    let order = order_params.resolve(WorkRepo::ORDERABLE)?;
    let works = WorkRepo::list(&state.pool, &filter, order).await?;
    Ok(Json(works))
}

/// GET /api/v1/works/featured
pub async fn list_featured(State(state): State<AppState>) -> AppResult<Json<Vec<WorkSummary>>> {
    let works = WorkRepo::list_featured(&state.pool).await?;
    Ok(Json(works))
}

/// GET /api/v1/works/by-category?category=...
///
/// The `category` parameter is required; its absence is a 400.
pub async fn list_by_category(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> AppResult<Json<Vec<WorkSummary>>> {
    let category = params.category.ok_or_else(|| {
        AppError::BadRequest("Missing required query parameter 'category'".into())
    })?;

    let works = WorkRepo::list_by_category(&state.pool, &category).await?;
    Ok(Json(works))
}

/// POST /api/v1/works
pub async fn create(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateWork>,
) -> AppResult<(StatusCode, Json<Work>)> {
    let work = WorkRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(work)))
}

/// GET /api/v1/works/{slug}
///
/// Detail shape: the full row plus `gallery_images`, the nested category
/// summary, and up to 6 same-category `related_works` excluding this one.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<WorkDetail>> {
    let work = WorkRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Work",
                key: slug,
            })
        })?;

    let category = WorkCategoryRepo::find_with_count_by_id(&state.pool, work.category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorkCategory",
            id: work.category_id,
        }))?;

    let related_works = WorkRepo::related(&state.pool, work.category_id, work.id).await?;

    Ok(Json(WorkDetail::new(work, category, related_works)))
}

/// PUT /api/v1/works/{slug}
pub async fn update(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdateWork>,
) -> AppResult<Json<Work>> {
    let work = WorkRepo::update(&state.pool, &slug, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Work",
                key: slug,
            })
        })?;
    Ok(Json(work))
}

/// DELETE /api/v1/works/{slug}
pub async fn delete(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = WorkRepo::delete(&state.pool, &slug).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFoundByKey {
            entity: "Work",
            key: slug,
        }))
    }
}
