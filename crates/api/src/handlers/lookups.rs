//! Read-only handlers for the catalog lookup tables.
//!
//! Lookup rows are seeded by migration and only ever listed or fetched
//! through the API; mutations happen via new migrations.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_db::repositories::{
    CourseStatusRepo, DifficultyLevelRepo, EnrollmentStatusRepo, LessonTypeRepo,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/difficulty-levels
///
/// List difficulty levels ordered by `level_order`.
pub async fn list_difficulty_levels(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let levels = DifficultyLevelRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: levels }))
}

/// GET /api/v1/difficulty-levels/{id}
pub async fn get_difficulty_level(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let level = DifficultyLevelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("DifficultyLevel", id))?;
    Ok(Json(DataResponse { data: level }))
}

/// GET /api/v1/course-statuses
pub async fn list_course_statuses(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let statuses = CourseStatusRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: statuses }))
}

/// GET /api/v1/course-statuses/{id}
pub async fn get_course_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let status = CourseStatusRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("CourseStatus", id))?;
    Ok(Json(DataResponse { data: status }))
}

/// GET /api/v1/lesson-types
pub async fn list_lesson_types(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let types = LessonTypeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: types }))
}

/// GET /api/v1/lesson-types/{id}
pub async fn get_lesson_type(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let lesson_type = LessonTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("LessonType", id))?;
    Ok(Json(DataResponse { data: lesson_type }))
}

/// GET /api/v1/enrollment-statuses
pub async fn list_enrollment_statuses(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let statuses = EnrollmentStatusRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: statuses }))
}

/// GET /api/v1/enrollment-statuses/{id}
pub async fn get_enrollment_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let status = EnrollmentStatusRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("EnrollmentStatus", id))?;
    Ok(Json(DataResponse { data: status }))
}
