//! Route definitions for courses and their nested views.

use axum::routing::get;
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

/// Routes mounted at `/courses`. Courses are addressed by slug; the
/// static `/published` segment takes precedence over the slug capture.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// GET    /published             -> list_published
/// GET    /{slug}                -> get_by_slug
/// PUT    /{slug}                -> update
/// PATCH  /{slug}                -> update
/// DELETE /{slug}                -> delete
/// GET    /{slug}/lessons        -> ordered lessons
/// GET    /{slug}/comments       -> comments
/// GET    /{slug}/enrollments    -> enrollments
/// GET    /{slug}/stats          -> aggregate stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::list).post(courses::create))
        .route("/published", get(courses::list_published))
        .route(
            "/{slug}",
            get(courses::get_by_slug)
                .put(courses::update)
                .patch(courses::update)
                .delete(courses::delete),
        )
        .route("/{slug}/lessons", get(courses::lessons))
        .route("/{slug}/comments", get(courses::comments))
        .route("/{slug}/enrollments", get(courses::enrollments))
        .route("/{slug}/stats", get(courses::stats))
}
