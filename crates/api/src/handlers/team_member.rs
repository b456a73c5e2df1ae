//! Handlers for the `/team-members` resource.

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};
use atelier_db::repositories::TeamMemberRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::query::IncludeInactiveParams;
use crate::state::AppState;

/// GET /api/v1/team-members
///
/// Active members only unless `?include_inactive=true`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<Vec<TeamMember>>> {
    let members = TeamMemberRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(members))
}

/// POST /api/v1/team-members
pub async fn create(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateTeamMember>,
) -> AppResult<(StatusCode, Json<TeamMember>)> {
    let member = TeamMemberRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /api/v1/team-members/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TeamMember>> {
    let member = TeamMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }))?;
    Ok(Json(member))
}

/// PUT /api/v1/team-members/{id}
pub async fn update(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeamMember>,
) -> AppResult<Json<TeamMember>> {
    let member = TeamMemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }))?;
    Ok(Json(member))
}

/// DELETE /api/v1/team-members/{id}
pub async fn delete(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TeamMemberRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }))
    }
}
