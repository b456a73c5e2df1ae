//! Route definitions for the `/works` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::work;
use crate::state::AppState;

/// Routes mounted at `/works`.
///
/// ```text
/// GET    /              -> list (?category=&featured=&search=)
/// POST   /              -> create (staff)
/// GET    /featured      -> list_featured
/// GET    /by-category   -> list_by_category (?category= required)
/// GET    /{slug}        -> get_by_slug (detail)
/// PUT|PATCH    /{slug}        -> update (staff)
/// DELETE /{slug}        -> delete (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(work::list).post(work::create))
        .route("/featured", get(work::list_featured))
        .route("/by-category", get(work::list_by_category))
        .route(
            "/{slug}",
            get(work::get_by_slug)
                .put(work::update)
                .patch(work::update)
                .delete(work::delete),
        )
}
