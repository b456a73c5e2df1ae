//! Handlers for the `/about` singleton resource.

use atelier_db::models::about_section::{AboutSection, UpdateAboutSection};
use atelier_db::repositories::AboutSectionRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

/// GET /api/v1/about and GET /api/v1/about/current
///
/// The singleton row is materialized on first read, so this never 404s.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<AboutSection>> {
    let about = AboutSectionRepo::load(&state.pool).await?;
    Ok(Json(about))
}

/// PUT /api/v1/about
pub async fn update(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<UpdateAboutSection>,
) -> AppResult<Json<AboutSection>> {
    let about = AboutSectionRepo::update(&state.pool, &input).await?;
    Ok(Json(about))
}
