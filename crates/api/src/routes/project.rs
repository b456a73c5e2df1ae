//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /           -> list (?type=&category=&featured=&search=)
/// POST   /           -> create (staff)
/// GET    /featured   -> list_featured
/// GET    /by-type    -> list_by_type (?type= required)
/// GET    /{slug}     -> get_by_slug (detail)
/// PUT|PATCH    /{slug}     -> update (staff)
/// DELETE /{slug}     -> delete (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/featured", get(project::list_featured))
        .route("/by-type", get(project::list_by_type))
        .route(
            "/{slug}",
            get(project::get_by_slug)
                .put(project::update)
                .patch(project::update)
                .delete(project::delete),
        )
}
