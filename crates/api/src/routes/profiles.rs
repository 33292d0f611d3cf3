//! Route definitions for profiles.

use axum::routing::get;
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

/// Routes mounted at `/profiles`. Creation happens through `POST /users`.
///
/// ```text
/// GET    /        -> list
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profiles::list))
        .route(
            "/{id}",
            get(profiles::get_by_id)
                .put(profiles::update)
                .patch(profiles::update)
                .delete(profiles::delete),
        )
}
