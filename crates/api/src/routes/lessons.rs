//! Route definitions for lessons.

use axum::routing::get;
use axum::Router;

use crate::handlers::lessons;
use crate::state::AppState;

/// Routes mounted at `/lessons`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lessons::list).post(lessons::create))
        .route(
            "/{id}",
            get(lessons::get_by_id)
                .put(lessons::update)
                .patch(lessons::update)
                .delete(lessons::delete),
        )
}
