pub mod about;
pub mod auth;
pub mod category;
pub mod collaboration;
pub mod health;
pub mod hero_slide;
pub mod media;
pub mod news;
pub mod project;
pub mod settings;
pub mod slogan;
pub mod team_member;
pub mod work;
pub mod work_category;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/verify                         verify token (public)
/// /auth/logout                         logout (requires auth)
///
/// /categories                          list, create
/// /categories/{slug}                   get, update, delete
///
/// /projects                            list, create
/// /projects/featured                   featured summaries (GET)
/// /projects/by-type                    filtered by required ?type= (GET)
/// /projects/{slug}                     detail, update, delete
///
/// /news                                list, create
/// /news/latest                         bounded latest slice (GET)
/// /news/{slug}                         detail, update, delete
///
/// /collaborations                      create (public), list (admin)
/// /collaborations/{id}                 get, delete (admin)
/// /collaborations/{id}/mark-reviewed   mark reviewed (POST, admin)
/// /collaborations/{id}/update-status   update status (POST, admin)
/// /collaborations/{id}/notes           set admin notes (POST, admin)
///
/// /settings                            get, update (singleton)
/// /settings/current                    get (alias)
///
/// /hero-slides                         list, create
/// /hero-slides/{id}                    get, update, delete
///
/// /work-categories                     list, create
/// /work-categories/{name}              get, update, delete (cascades works)
///
/// /works                               list, create
/// /works/featured                      featured summaries (GET)
/// /works/by-category                   filtered by required ?category= (GET)
/// /works/{slug}                        detail (with related works), update, delete
///
/// /team-members                        list, create
/// /team-members/{id}                   get, update, delete
///
/// /about, /about/current               get, update (singleton)
/// /slogan, /slogan/current             get, update (singleton)
///
/// /media                               upload (POST, multipart)
/// /media/{name}                        delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, verify, logout).
        .nest("/auth", auth::router())
        // Portfolio content.
        .nest("/categories", category::router())
        .nest("/projects", project::router())
        .nest("/news", news::router())
        // Collaboration-request intake.
        .nest("/collaborations", collaboration::router())
        // Site chrome: settings, hero slides, about, slogan.
        .nest("/settings", settings::router())
        .nest("/hero-slides", hero_slide::router())
        .nest("/about", about::router())
        .nest("/slogan", slogan::router())
        // Works gallery.
        .nest("/work-categories", work_category::router())
        .nest("/works", work::router())
        // Team page.
        .nest("/team-members", team_member::router())
        // Media uploads through the storage adapter.
        .nest("/media", media::router())
}
