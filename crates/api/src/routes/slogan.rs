//! Route definitions for the `/slogan` singleton resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::slogan;
use crate::state::AppState;

/// Routes mounted at `/slogan`.
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
            get(slogan::get).put(slogan::update).patch(slogan::update),
        )
        .route("/current", get(slogan::get))
}
