//! Route definitions for the `/media` resource.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/media`.
///
/// ```text
/// POST   /         -> upload (staff, multipart)
/// DELETE /{name}   -> delete (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(media::upload))
        .route("/{name}", delete(media::delete))
}
