//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create (staff)
/// GET    /{slug}   -> get_by_slug
/// PUT|PATCH    /{slug}   -> update (staff)
/// DELETE /{slug}   -> delete (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(category::list).post(category::create))
        .route(
            "/{slug}",
            get(category::get_by_slug)
                .put(category::update)
                .patch(category::update)
                .delete(category::delete),
        )
}
