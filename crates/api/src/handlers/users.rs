//! Handlers for the `/users` resource.
//!
//! User creation hashes the submitted password with Argon2id and creates
//! the nested profile in the same transaction.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_db::models::user::{CreateUser, UpdateProfile, UpdateUser, UserFilter};
use learnhub_db::repositories::{CourseRepo, EnrollmentRepo, ProfileRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users?search=&ordering=
///
/// List users with optional username/email/name search.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: users }))
}

/// POST /api/v1/users
///
/// Create a user and its profile. The plaintext password is hashed with
/// Argon2id before storage and never appears in any response.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(CoreError::Validation)?;
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let detail = UserRepo::create(&state.pool, &input, &password_hash).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/users/{id}
///
/// Get a user with its profile and derived course/enrollment counts.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = UserRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT/PATCH /api/v1/users/{id}
///
/// Partially update a user. `username` and `password_hash` are not
/// updatable through this endpoint.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("User", id))?;
    Ok(Json(DataResponse { data: user }))
}

/// DELETE /api/v1/users/{id}
///
/// Delete a user. Cascades to the profile, enrollments, and comments.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("User", id).into())
    }
}

/// GET /api/v1/users/{id}/profile
///
/// Get the profile belonging to a user.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::find_by_user(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Profile", id))?;
    Ok(Json(DataResponse { data: profile }))
}

/// PATCH /api/v1/users/{id}/update_profile
///
/// Partially update the profile belonging to a user.
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::update_by_user(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Profile", id))?;
    Ok(Json(DataResponse { data: profile }))
}

/// GET /api/v1/users/{id}/courses_taught
///
/// List the courses a user teaches.
pub async fn courses(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", id))?;
    let courses = CourseRepo::list_by_instructor(&state.pool, id).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// GET /api/v1/users/{id}/enrollments
///
/// List a user's enrollments.
pub async fn enrollments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", id))?;
    let enrollments = EnrollmentRepo::list_by_user(&state.pool, id).await?;
    Ok(Json(DataResponse { data: enrollments }))
}
