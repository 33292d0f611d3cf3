//! Route definitions for the read-only catalog lookup tables.

use axum::routing::get;
use axum::Router;

use crate::handlers::lookups;
use crate::state::AppState;

/// Routes mounted at `/difficulty-levels`.
pub fn difficulty_levels_router() -> Router<AppState> {
    Router::new()
        .route("/", get(lookups::list_difficulty_levels))
        .route("/{id}", get(lookups::get_difficulty_level))
}

/// Routes mounted at `/course-statuses`.
pub fn course_statuses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(lookups::list_course_statuses))
        .route("/{id}", get(lookups::get_course_status))
}

/// Routes mounted at `/lesson-types`.
pub fn lesson_types_router() -> Router<AppState> {
    Router::new()
        .route("/", get(lookups::list_lesson_types))
        .route("/{id}", get(lookups::get_lesson_type))
}

/// Routes mounted at `/enrollment-statuses`.
pub fn enrollment_statuses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(lookups::list_enrollment_statuses))
        .route("/{id}", get(lookups::get_enrollment_status))
}
