//! Route definitions for the `/collaborations` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::collaboration;
use crate::state::AppState;

/// Routes mounted at `/collaborations`.
///
/// ```text
/// POST   /                      -> create (public contact form)
/// GET    /                      -> list (admin)
/// GET    /{id}                  -> get_by_id (admin)
/// DELETE /{id}                  -> delete (admin)
/// POST   /{id}/mark-reviewed    -> mark_reviewed (admin)
/// POST   /{id}/update-status    -> update_status (admin)
/// POST   /{id}/notes            -> set_admin_notes (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(collaboration::list).post(collaboration::create),
        )
        .route(
            "/{id}",
            get(collaboration::get_by_id).delete(collaboration::delete),
        )
        .route("/{id}/mark-reviewed", post(collaboration::mark_reviewed))
        .route("/{id}/update-status", post(collaboration::update_status))
        .route("/{id}/notes", post(collaboration::set_admin_notes))
}
