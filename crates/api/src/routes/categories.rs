//! Route definitions for course categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/categories`. Categories are addressed by slug.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /{slug}             -> get_by_slug
/// PUT    /{slug}             -> update
/// PATCH  /{slug}             -> update
/// DELETE /{slug}             -> delete
/// GET    /{slug}/courses     -> courses in category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list).post(categories::create))
        .route(
            "/{slug}",
            get(categories::get_by_slug)
                .put(categories::update)
                .patch(categories::update)
                .delete(categories::delete),
        )
        .route("/{slug}/courses", get(categories::courses))
}
