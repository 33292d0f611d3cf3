//! Handlers for the `/lessons` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_db::models::lesson::{CreateLesson, LessonFilter, UpdateLesson};
use learnhub_db::repositories::{CourseRepo, LessonRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/lessons?course=&lesson_type=&is_published=&is_free=&search=&ordering=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<LessonFilter>,
) -> AppResult<impl IntoResponse> {
    let lessons = LessonRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: lessons }))
}

/// POST /api/v1/lessons
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLesson>,
) -> AppResult<impl IntoResponse> {
    CourseRepo::list_item_by_id(&state.pool, input.course_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Course", input.course_id))?;
    let lesson = LessonRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: lesson })))
}

/// GET /api/v1/lessons/{id}
///
/// Lesson detail with resolved course and type names.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let lesson = LessonRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Lesson", id))?;
    Ok(Json(DataResponse { data: lesson }))
}

/// PUT/PATCH /api/v1/lessons/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLesson>,
) -> AppResult<impl IntoResponse> {
    let lesson = LessonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Lesson", id))?;
    Ok(Json(DataResponse { data: lesson }))
}

/// DELETE /api/v1/lessons/{id}
///
/// Delete a lesson. Cascades to its progress rows; enrollments pointing
/// at it as current lesson fall back to NULL.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = LessonRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Lesson", id).into())
    }
}
