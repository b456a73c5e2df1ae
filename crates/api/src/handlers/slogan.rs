//! Handlers for the `/slogan` singleton resource.

use atelier_db::models::slogan_section::{SloganSection, UpdateSloganSection};
use atelier_db::repositories::SloganSectionRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

/// GET /api/v1/slogan and GET /api/v1/slogan/current
///
/// The singleton row is materialized on first read, so this never 404s.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<SloganSection>> {
    let slogan = SloganSectionRepo::load(&state.pool).await?;
    Ok(Json(slogan))
}

/// PUT /api/v1/slogan
pub async fn update(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<UpdateSloganSection>,
) -> AppResult<Json<SloganSection>> {
    let slogan = SloganSectionRepo::update(&state.pool, &input).await?;
    Ok(Json(slogan))
}
