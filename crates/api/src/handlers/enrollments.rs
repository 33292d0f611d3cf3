//! Handlers for the `/enrollments` resource and its workflow actions.
//!
//! Enrollment creation resolves the `active` status lookup, rejects
//! duplicates for the same (user, course) pair, and fans out one progress
//! row per existing lesson. The workflow actions drive the status machine:
//! `update_progress` transitions to `completed` at exactly 100 percent,
//! `cancel` transitions to `cancelled`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_db::models::enrollment::{
    CreateEnrollment, EnrollmentFilter, UpdateCurrentLessonRequest, UpdateEnrollment,
    UpdateProgressRequest,
};
use learnhub_db::repositories::{
    CourseRepo, EnrollmentRepo, EnrollmentStatusRepo, LessonProgressRepo, LessonRepo, UserRepo,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/enrollments?user=&course=&status=&ordering=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<EnrollmentFilter>,
) -> AppResult<impl IntoResponse> {
    let enrollments = EnrollmentRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: enrollments }))
}

/// POST /api/v1/enrollments
///
/// Enroll a user in a course. A second enrollment for the same pair is a
/// validation error; the unique constraint backstops concurrent inserts.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEnrollment>,
) -> AppResult<impl IntoResponse> {
    UserRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", input.user_id))?;
    CourseRepo::list_item_by_id(&state.pool, input.course_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Course", input.course_id))?;

    if EnrollmentRepo::exists(&state.pool, input.user_id, input.course_id).await? {
        return Err(CoreError::Validation(
            "user is already enrolled in this course".to_string(),
        )
        .into());
    }

    // Verified at boot, so a miss here is a seeding fault.
    let active = EnrollmentStatusRepo::find_by_name(&state.pool, "active")
        .await?
        .ok_or_else(|| {
            AppError::InternalError("enrollment status 'active' is not seeded".to_string())
        })?;

    let enrollment = EnrollmentRepo::create(&state.pool, &input, active.id).await?;
    let detail = EnrollmentRepo::find_detail(&state.pool, enrollment.id)
        .await?
        .expect("just created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/enrollments/{id}
///
/// Enrollment detail with resolved names and the embedded course
/// projection.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = EnrollmentRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Enrollment", id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT/PATCH /api/v1/enrollments/{id}
///
/// Update notes or status through the plain CRUD path. Progress changes
/// go through the `update_progress` action instead.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEnrollment>,
) -> AppResult<impl IntoResponse> {
    let enrollment = EnrollmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Enrollment", id))?;
    Ok(Json(DataResponse { data: enrollment }))
}

/// DELETE /api/v1/enrollments/{id}
///
/// Delete an enrollment. Cascades to its progress rows.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EnrollmentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Enrollment", id).into())
    }
}

/// PATCH /api/v1/enrollments/{id}/update_progress
///
/// Set the progress percentage directly. At exactly 100 the enrollment
/// transitions to `completed` and the completion time is stamped; values
/// below 100 never reverse a prior completed state.
pub async fn update_progress(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateProgressRequest>,
) -> AppResult<impl IntoResponse> {
    body.validate()?;

    EnrollmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Enrollment", id))?;

    // The status transition is skipped when the lookup row is absent; the
    // percentage still updates.
    let completed_status_id = if body.progress_percentage == 100.0 {
        EnrollmentStatusRepo::find_by_name(&state.pool, "completed")
            .await?
            .map(|s| s.id)
    } else {
        None
    };

    let enrollment =
        EnrollmentRepo::update_progress(&state.pool, id, body.progress_percentage, completed_status_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Enrollment", id))?;
    Ok(Json(DataResponse { data: enrollment }))
}

/// GET /api/v1/enrollments/{id}/lesson_progress
///
/// List the enrollment's per-lesson progress rows in lesson order.
pub async fn lesson_progress(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    EnrollmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Enrollment", id))?;
    let rows = LessonProgressRepo::list_by_enrollment(&state.pool, id).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// PATCH /api/v1/enrollments/{id}/update_current_lesson
///
/// Point the enrollment at a new current lesson. The lesson must belong
/// to the enrolled course.
pub async fn update_current_lesson(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateCurrentLessonRequest>,
) -> AppResult<impl IntoResponse> {
    let enrollment = EnrollmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Enrollment", id))?;

    LessonRepo::find_in_course(&state.pool, body.lesson_id, enrollment.course_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Lesson", body.lesson_id))?;

    let enrollment = EnrollmentRepo::set_current_lesson(&state.pool, id, body.lesson_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Enrollment", id))?;
    Ok(Json(DataResponse { data: enrollment }))
}

/// POST /api/v1/enrollments/{id}/cancel
///
/// Transition the enrollment to `cancelled`. A missing cancelled lookup
/// row surfaces as not-found rather than a silent no-op.
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let cancelled = EnrollmentStatusRepo::find_by_name(&state.pool, "cancelled")
        .await?
        .ok_or_else(|| CoreError::not_found_key("EnrollmentStatus", "cancelled"))?;

    let enrollment = EnrollmentRepo::cancel(&state.pool, id, cancelled.id)
        .await?
        .ok_or_else(|| CoreError::not_found("Enrollment", id))?;
    Ok(Json(DataResponse { data: enrollment }))
}
