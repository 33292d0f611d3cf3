//! Handlers for the `/courses` resource.
//!
//! Courses are addressed by slug, derived from the title at creation when
//! omitted and stable afterwards. Nested views expose a course's lessons,
//! comments, enrollments, and aggregate statistics.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use learnhub_core::error::CoreError;
use learnhub_db::models::course::{CourseFilter, CreateCourse, UpdateCourse};
use learnhub_db::repositories::{CommentRepo, CourseRepo, EnrollmentRepo, LessonRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/courses?category=&difficulty_level=&status=&instructor=&language=&search=&ordering=
///
/// List courses with resolved names and derived counts.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<CourseFilter>,
) -> AppResult<impl IntoResponse> {
    let courses = CourseRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// POST /api/v1/courses
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<impl IntoResponse> {
    let course = CourseRepo::create(&state.pool, &input).await?;
    let detail = CourseRepo::find_detail(&state.pool, &course.slug)
        .await?
        .expect("just created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/courses/published
///
/// List only courses that carry a publication timestamp.
pub async fn list_published(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let courses = CourseRepo::list_published(&state.pool).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// GET /api/v1/courses/{slug}
///
/// Full course detail with its ordered lessons.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let detail = CourseRepo::find_detail(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found_key("Course", &slug))?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT/PATCH /api/v1/courses/{slug}
///
/// Partially update a course. The slug itself is not updatable.
pub async fn update(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<impl IntoResponse> {
    CourseRepo::update(&state.pool, &slug, &input)
        .await?
        .ok_or_else(|| CoreError::not_found_key("Course", &slug))?;
    let detail = CourseRepo::find_detail(&state.pool, &slug)
        .await?
        .expect("just updated");
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /api/v1/courses/{slug}
///
/// Delete a course. Cascades to lessons, enrollments, and comments.
pub async fn delete(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = CourseRepo::delete(&state.pool, &slug).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found_key("Course", &slug).into())
    }
}

/// GET /api/v1/courses/{slug}/lessons
///
/// List a course's lessons in `order_index` order.
pub async fn lessons(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let course_id = CourseRepo::id_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found_key("Course", &slug))?;
    let lessons = LessonRepo::list_items_by_course(&state.pool, course_id).await?;
    Ok(Json(DataResponse { data: lessons }))
}

/// GET /api/v1/courses/{slug}/comments
///
/// List a course's comments, oldest first.
pub async fn comments(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let course_id = CourseRepo::id_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found_key("Course", &slug))?;
    let comments = CommentRepo::list_by_course(&state.pool, course_id).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// GET /api/v1/courses/{slug}/enrollments
///
/// List a course's enrollments.
pub async fn enrollments(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let course_id = CourseRepo::id_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found_key("Course", &slug))?;
    let enrollments = EnrollmentRepo::list_by_course(&state.pool, course_id).await?;
    Ok(Json(DataResponse { data: enrollments }))
}

/// GET /api/v1/courses/{slug}/stats
///
/// Aggregate enrollment/lesson/review statistics for a course.
pub async fn stats(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let stats = CourseRepo::stats(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found_key("Course", &slug))?;
    Ok(Json(DataResponse { data: stats }))
}
