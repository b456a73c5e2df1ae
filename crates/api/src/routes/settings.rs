//! Route definitions for the `/settings` singleton resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET /          -> get
/// PUT|PATCH /          -> update (staff)
/// GET /current   -> get (alias)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(settings::get).put(settings::update).patch(settings::update),
        )
        .route("/current", get(settings::get))
}
