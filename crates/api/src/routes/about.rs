//! Route definitions for the `/about` singleton resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::about;
use crate::state::AppState;

/// Routes mounted at `/about`.
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
            get(about::get).put(about::update).patch(about::update),
        )
        .route("/current", get(about::get))
}
