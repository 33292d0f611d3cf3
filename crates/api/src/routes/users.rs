//! Route definitions for users and their nested views.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// PATCH  /{id}                -> update
/// DELETE /{id}                -> delete
/// GET    /{id}/profile           -> get_profile
/// PATCH  /{id}/update_profile    -> update_profile
/// GET    /{id}/courses_taught    -> courses taught
/// GET    /{id}/enrollments       -> enrollments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list).post(users::create))
        .route(
            "/{id}",
            get(users::get_by_id)
                .put(users::update)
                .patch(users::update)
                .delete(users::delete),
        )
        .route("/{id}/profile", get(users::get_profile))
        .route("/{id}/update_profile", patch(users::update_profile))
        .route("/{id}/courses_taught", get(users::courses))
        .route("/{id}/enrollments", get(users::enrollments))
}
