//! Route definitions for the `/news` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

/// Routes mounted at `/news`.
///
/// ```text
/// GET    /          -> list (published only for non-staff)
/// POST   /          -> create (staff; author = caller)
/// GET    /latest    -> latest (?count=, default 3, clamped 1..=20)
/// GET    /{slug}    -> get_by_slug
/// PUT|PATCH    /{slug}    -> update (staff)
/// DELETE /{slug}    -> delete (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(news::list).post(news::create))
        .route("/latest", get(news::latest))
        .route(
            "/{slug}",
            get(news::get_by_slug)
                .put(news::update)
                .patch(news::update)
                .delete(news::delete),
        )
}
