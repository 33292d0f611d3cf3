//! Handlers for the `/lesson-progress` resource.
//!
//! Rows are normally created by enrollment fan-out; the CRUD surface here
//! covers corrections and the `complete` workflow action, which is the
//! only path that recomputes the owning enrollment's percentage.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_db::models::lesson_progress::{
    CreateLessonProgress, LessonProgressFilter, UpdateLessonProgress,
};
use learnhub_db::repositories::{EnrollmentRepo, LessonProgressRepo, LessonRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/lesson-progress?enrollment=&lesson=&is_completed=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<LessonProgressFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = LessonProgressRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /api/v1/lesson-progress
///
/// Create a progress row directly. The lesson must belong to the
/// enrollment's course; the unique constraint rejects duplicates.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLessonProgress>,
) -> AppResult<impl IntoResponse> {
    let enrollment = EnrollmentRepo::find_by_id(&state.pool, input.enrollment_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Enrollment", input.enrollment_id))?;
    LessonRepo::find_in_course(&state.pool, input.lesson_id, enrollment.course_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Lesson", input.lesson_id))?;

    let progress = LessonProgressRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: progress })))
}

/// GET /api/v1/lesson-progress/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let progress = LessonProgressRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("LessonProgress", id))?;
    Ok(Json(DataResponse { data: progress }))
}

/// PUT/PATCH /api/v1/lesson-progress/{id}
///
/// Plain CRUD update. Does not recompute the enrollment percentage.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLessonProgress>,
) -> AppResult<impl IntoResponse> {
    let progress = LessonProgressRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("LessonProgress", id))?;
    Ok(Json(DataResponse { data: progress }))
}

/// DELETE /api/v1/lesson-progress/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = LessonProgressRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("LessonProgress", id).into())
    }
}

/// POST /api/v1/lesson-progress/{id}/complete
///
/// Mark the lesson completed and recompute the owning enrollment's
/// percentage from completed-lesson counts.
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let progress = LessonProgressRepo::complete(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("LessonProgress", id))?;
    Ok(Json(DataResponse { data: progress }))
}
