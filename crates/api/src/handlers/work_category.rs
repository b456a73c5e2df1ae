//! Handlers for the `/work-categories` resource. Lookup key is the name.

use atelier_core::error::CoreError;
use atelier_db::models::work_category::{
    CreateWorkCategory, UpdateWorkCategory, WorkCategory, WorkCategoryWithCount,
};
use atelier_db::repositories::WorkCategoryRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::query::IncludeInactiveParams;
use crate::state::AppState;

/// GET /api/v1/work-categories
///
/// Active categories only unless `?include_inactive=true`. Each row carries a
/// live count of its non-featured works.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<Vec<WorkCategoryWithCount>>> {
    let categories = WorkCategoryRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(categories))
}

/// POST /api/v1/work-categories
pub async fn create(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateWorkCategory>,
) -> AppResult<(StatusCode, Json<WorkCategory>)> {
    let category = WorkCategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/work-categories/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<WorkCategoryWithCount>> {
    let category = WorkCategoryRepo::find_with_count(&state.pool, &name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "WorkCategory",
                key: name,
            })
        })?;
    Ok(Json(category))
}

/// PUT /api/v1/work-categories/{name}
pub async fn update(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(input): Json<UpdateWorkCategory>,
) -> AppResult<Json<WorkCategory>> {
    let category = WorkCategoryRepo::update(&state.pool, &name, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "WorkCategory",
                key: name,
            })
        })?;
    Ok(Json(category))
}

/// DELETE /api/v1/work-categories/{name}
///
/// Dependent works are deleted with the category.
pub async fn delete(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = WorkCategoryRepo::delete(&state.pool, &name).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFoundByKey {
            entity: "WorkCategory",
            key: name,
        }))
    }
}
