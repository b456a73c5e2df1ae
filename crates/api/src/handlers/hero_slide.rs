//! Handlers for the `/hero-slides` resource.

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::hero_slide::{CreateHeroSlide, HeroSlide, UpdateHeroSlide};
use atelier_db::repositories::HeroSlideRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::query::IncludeInactiveParams;
use crate::state::AppState;

/// GET /api/v1/hero-slides
///
/// Active slides only unless `?include_inactive=true`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<Vec<HeroSlide>>> {
    let slides = HeroSlideRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(slides))
}

/// POST /api/v1/hero-slides
pub async fn create(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateHeroSlide>,
) -> AppResult<(StatusCode, Json<HeroSlide>)> {
    let slide = HeroSlideRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(slide)))
}

/// GET /api/v1/hero-slides/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<HeroSlide>> {
    let slide = HeroSlideRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroSlide",
            id,
        }))?;
    Ok(Json(slide))
}

/// PUT /api/v1/hero-slides/{id}
pub async fn update(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHeroSlide>,
) -> AppResult<Json<HeroSlide>> {
    let slide = HeroSlideRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroSlide",
            id,
        }))?;
    Ok(Json(slide))
}

/// DELETE /api/v1/hero-slides/{id}
pub async fn delete(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = HeroSlideRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "HeroSlide",
            id,
        }))
    }
}
