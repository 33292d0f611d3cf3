//! Route definitions for per-lesson progress.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::lesson_progress;
use crate::state::AppState;

/// Routes mounted at `/lesson-progress`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// PATCH  /{id}               -> update
/// DELETE /{id}               -> delete
/// POST   /{id}/complete      -> complete (recomputes enrollment %)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(lesson_progress::list).post(lesson_progress::create),
        )
        .route(
            "/{id}",
            get(lesson_progress::get_by_id)
                .put(lesson_progress::update)
                .patch(lesson_progress::update)
                .delete(lesson_progress::delete),
        )
        .route("/{id}/complete", post(lesson_progress::complete))
}
