//! Handlers for the `/projects` resource. Lookup key is the slug.

use atelier_core::content::validate_project_type;
use atelier_core::error::CoreError;
use atelier_db::models::project::{
    CreateProject, Project, ProjectDetail, ProjectFilter, ProjectSummary, UpdateProject,
};
use atelier_db::repositories::{CategoryRepo, ProjectRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::query::{OrderingParams, TypeParams};
use crate::state::AppState;

/// GET /api/v1/projects
///
/// Supports `?type=`, `?category=`, `?featured=`, and `?search=` filters,
/// plus `?ordering=` over display_order, created_at, and title.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
    Query(order_params): Query<OrderingParams>,
) -> AppResult<Json<Vec<ProjectSummary>>> {
    let order = order_params.resolve(ProjectRepo::ORDERABLE)?;
    let projects = ProjectRepo::list(&state.pool, &filter, order).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/featured
pub async fn list_featured(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProjectSummary>>> {
    let projects = ProjectRepo::list_featured(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/by-type?type=...
///
/// The `type` parameter is required; its absence is a 400.
pub async fn list_by_type(
    State(state): State<AppState>,
    Query(params): Query<TypeParams>,
) -> AppResult<Json<Vec<ProjectSummary>>> {
    let project_type = params
        .project_type
        .ok_or_else(|| AppError::BadRequest("Missing required query parameter 'type'".into()))?;
    validate_project_type(&project_type)?;

    let projects = ProjectRepo::list_by_type(&state.pool, &project_type).await?;
    Ok(Json(projects))
}

/// POST /api/v1/projects
pub async fn create(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_project_type(&input.project_type)?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects/{slug}
///
/// Detail shape: the full row plus `gallery_images` and the nested category
/// summary (with its live project count) when one is assigned.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ProjectDetail>> {
    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Project",
                key: slug,
            })
        })?;

    let category = match project.category_id {
        Some(category_id) => CategoryRepo::find_with_count_by_id(&state.pool, category_id).await?,
        None => None,
    };

    Ok(Json(ProjectDetail::new(project, category)))
}

/// PUT /api/v1/projects/{slug}
pub async fn update(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    if let Some(ref project_type) = input.project_type {
        validate_project_type(project_type)?;
    }

    let project = ProjectRepo::update(&state.pool, &slug, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Project",
                key: slug,
            })
        })?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{slug}
pub async fn delete(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, &slug).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFoundByKey {
            entity: "Project",
            key: slug,
        }))
    }
}
