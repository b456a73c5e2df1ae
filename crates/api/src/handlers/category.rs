//! Handlers for the `/categories` resource. Lookup key is the slug.

use atelier_core::error::CoreError;
use atelier_db::models::category::{Category, CategoryWithCount, CreateCategory, UpdateCategory};
use atelier_db::repositories::CategoryRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::query::OrderingParams;
use crate::state::AppState;

/// GET /api/v1/categories
///
/// Supports `?ordering=` over name and created_at.
pub async fn list(
    State(state): State<AppState>,
    Query(order_params): Query<OrderingParams>,
) -> AppResult<Json<Vec<CategoryWithCount>>> {
    let order = order_params.resolve(CategoryRepo::ORDERABLE)?;
    let categories = CategoryRepo::list(&state.pool, order).await?;
    Ok(Json(categories))
}

/// POST /api/v1/categories
pub async fn create(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/categories/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<CategoryWithCount>> {
    let category = CategoryRepo::find_with_count(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Category",
                key: slug,
            })
        })?;
    Ok(Json(category))
}

/// PUT /api/v1/categories/{slug}
pub async fn update(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::update(&state.pool, &slug, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Category",
                key: slug,
            })
        })?;
    Ok(Json(category))
}

/// DELETE /api/v1/categories/{slug}
///
/// Dependent projects survive with `category_id` nulled out.
pub async fn delete(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete(&state.pool, &slug).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFoundByKey {
            entity: "Category",
            key: slug,
        }))
    }
}
