//! Handlers for the `/comments` resource.
//!
//! A review is a comment flagged `is_review` with a mandatory 1-5 rating;
//! only such comments feed course average ratings.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_db::models::comment::{CommentFilter, CreateComment, UpdateComment};
use learnhub_db::repositories::{CommentRepo, CourseRepo, UserRepo};
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/comments?user=&course=&rating=&is_review=&search=&ordering=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<CommentFilter>,
) -> AppResult<impl IntoResponse> {
    let comments = CommentRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// GET /api/v1/comments/reviews
///
/// List only flagged reviews that carry a rating.
pub async fn reviews(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let reviews = CommentRepo::list_reviews(&state.pool).await?;
    Ok(Json(DataResponse { data: reviews }))
}

/// POST /api/v1/comments
///
/// Create a comment. A submission flagged as a review must carry a
/// rating.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if input.is_review.unwrap_or(false) && input.rating.is_none() {
        return Err(CoreError::Validation("rating is required for reviews".to_string()).into());
    }

    UserRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", input.user_id))?;
    CourseRepo::list_item_by_id(&state.pool, input.course_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Course", input.course_id))?;

    let comment = CommentRepo::create(&state.pool, &input).await?;
    let detail = CommentRepo::find_detail(&state.pool, comment.id)
        .await?
        .expect("just created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/comments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let comment = CommentRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Comment", id))?;
    Ok(Json(DataResponse { data: comment }))
}

/// PUT/PATCH /api/v1/comments/{id}
///
/// Partially update a comment. The review-requires-rating rule is checked
/// against the merged result of the update, so a comment cannot be
/// flagged as a review while leaving it unrated.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComment>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let existing = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Comment", id))?;

    let effective_is_review = input.is_review.unwrap_or(existing.is_review);
    let effective_rating = input.rating.or(existing.rating);
    if effective_is_review && effective_rating.is_none() {
        return Err(CoreError::Validation("rating is required for reviews".to_string()).into());
    }

    let comment = CommentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Comment", id))?;
    Ok(Json(DataResponse { data: comment }))
}

/// DELETE /api/v1/comments/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CommentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Comment", id).into())
    }
}
