//! Handlers for the `/collaborations` resource.
//!
//! The create endpoint is the public contact form; everything else is
//! admin-only intake management. `status`, `admin_notes`, and `reviewed` are
//! server-managed and never read from the public payload.

use atelier_core::collaboration::{validate_project_type, validate_status};
use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::collaboration::{
    Collaboration, CollaborationFilter, CreateCollaboration,
};
use atelier_db::repositories::CollaborationRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::OrderingParams;
use crate::state::AppState;

/// Request body for `POST /collaborations/{id}/update-status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Request body for `POST /collaborations/{id}/notes`.
#[derive(Debug, Deserialize)]
pub struct AdminNotesRequest {
    pub admin_notes: String,
}

/// POST /api/v1/collaborations (public)
///
/// Field-level validation (name, email format, message length) and the
/// project-type enum check both run before any write.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCollaboration>,
) -> AppResult<(StatusCode, Json<Collaboration>)> {
    input.validate()?;
    validate_project_type(&input.project_type)?;

    let collaboration = CollaborationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        collaboration_id = collaboration.id,
        email = %collaboration.email,
        "Collaboration request received"
    );

    Ok((StatusCode::CREATED, Json(collaboration)))
}

/// GET /api/v1/collaborations (admin)
///
/// Supports `?status=`, `?reviewed=`, and `?project_type=` filters, plus
/// `?ordering=` over submitted_at and status.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<CollaborationFilter>,
    Query(order_params): Query<OrderingParams>,
) -> AppResult<Json<Vec<Collaboration>>> {
    let order = order_params.resolve(CollaborationRepo::ORDERABLE)?;
    let collaborations = CollaborationRepo::list(&state.pool, &filter, order).await?;
    Ok(Json(collaborations))
}

/// GET /api/v1/collaborations/{id} (admin)
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Collaboration>> {
    let collaboration = CollaborationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collaboration",
            id,
        }))?;
    Ok(Json(collaboration))
}

/// POST /api/v1/collaborations/{id}/mark-reviewed (admin)
pub async fn mark_reviewed(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Collaboration>> {
    let collaboration = CollaborationRepo::mark_reviewed(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collaboration",
            id,
        }))?;
    Ok(Json(collaboration))
}

/// POST /api/v1/collaborations/{id}/update-status (admin)
///
/// A value outside the status enum is a 400 and leaves the row untouched.
pub async fn update_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<Collaboration>> {
    validate_status(&input.status)?;

    let collaboration = CollaborationRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collaboration",
            id,
        }))?;
    Ok(Json(collaboration))
}

/// POST /api/v1/collaborations/{id}/notes (admin)
pub async fn set_admin_notes(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AdminNotesRequest>,
) -> AppResult<Json<Collaboration>> {
    let collaboration = CollaborationRepo::set_admin_notes(&state.pool, id, &input.admin_notes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collaboration",
            id,
        }))?;
    Ok(Json(collaboration))
}

/// DELETE /api/v1/collaborations/{id} (admin)
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CollaborationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Collaboration",
            id,
        }))
    }
}
