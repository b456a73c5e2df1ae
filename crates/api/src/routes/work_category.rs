//! Route definitions for the `/work-categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::work_category;
use crate::state::AppState;

/// Routes mounted at `/work-categories`.
///
/// ```text
/// GET    /         -> list (?include_inactive=)
/// POST   /         -> create (staff)
/// GET    /{name}   -> get_by_name
/// PUT|PATCH    /{name}   -> update (staff)
/// DELETE /{name}   -> delete (staff; cascades works)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(work_category::list).post(work_category::create))
        .route(
            "/{name}",
            get(work_category::get_by_name)
                .put(work_category::update)
                .patch(work_category::update)
                .delete(work_category::delete),
        )
}
