//! Route definitions for comments and reviews.

use axum::routing::get;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Routes mounted at `/comments`. The static `/reviews` segment takes
/// precedence over the id capture.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// GET    /reviews    -> reviews (is_review with rating)
/// GET    /{id}       -> get_by_id
/// PUT    /{id}       -> update
/// PATCH  /{id}       -> update
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(comments::list).post(comments::create))
        .route("/reviews", get(comments::reviews))
        .route(
            "/{id}",
            get(comments::get_by_id)
                .put(comments::update)
                .patch(comments::update)
                .delete(comments::delete),
        )
}
