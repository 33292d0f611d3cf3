//! Route definitions for enrollments and their workflow actions.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::enrollments;
use crate::state::AppState;

/// Routes mounted at `/enrollments`.
///
/// ```text
/// GET    /                                list
/// POST   /                                create (with lesson fan-out)
/// GET    /{id}                            get_by_id
/// PUT    /{id}                            update
/// PATCH  /{id}                            update
/// DELETE /{id}                            delete
/// PATCH  /{id}/update_progress            set percentage directly
/// GET    /{id}/lesson_progress            per-lesson progress rows
/// PATCH  /{id}/update_current_lesson      set current-lesson pointer
/// POST   /{id}/cancel                     transition to cancelled
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(enrollments::list).post(enrollments::create))
        .route(
            "/{id}",
            get(enrollments::get_by_id)
                .put(enrollments::update)
                .patch(enrollments::update)
                .delete(enrollments::delete),
        )
        .route(
            "/{id}/update_progress",
            patch(enrollments::update_progress),
        )
        .route("/{id}/lesson_progress", get(enrollments::lesson_progress))
        .route(
            "/{id}/update_current_lesson",
            patch(enrollments::update_current_lesson),
        )
        .route("/{id}/cancel", post(enrollments::cancel))
}
