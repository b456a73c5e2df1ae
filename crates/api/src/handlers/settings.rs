//! Handlers for the `/settings` singleton resource.

use atelier_db::models::site_settings::{SiteSettingsResponse, UpdateSiteSettings};
use atelier_db::repositories::SiteSettingsRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

/// GET /api/v1/settings and GET /api/v1/settings/current
///
/// The singleton row is materialized on first read, so this never 404s.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<SiteSettingsResponse>> {
    let settings = SiteSettingsRepo::load(&state.pool).await?;
    Ok(Json(settings.into()))
}

/// PUT /api/v1/settings
pub async fn update(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<UpdateSiteSettings>,
) -> AppResult<Json<SiteSettingsResponse>> {
    let settings = SiteSettingsRepo::update(&state.pool, &input).await?;
    Ok(Json(settings.into()))
}
