//! Route definitions for the `/hero-slides` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::hero_slide;
use crate::state::AppState;

/// Routes mounted at `/hero-slides`.
///
/// ```text
/// GET    /       -> list (?include_inactive=)
/// POST   /       -> create (staff)
/// GET    /{id}   -> get_by_id
/// PUT|PATCH    /{id}   -> update (staff)
/// DELETE /{id}   -> delete (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hero_slide::list).post(hero_slide::create))
        .route(
            "/{id}",
            get(hero_slide::get_by_id)
                .put(hero_slide::update)
                .patch(hero_slide::update)
                .delete(hero_slide::delete),
        )
}
