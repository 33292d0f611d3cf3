//! Handlers for the `/categories` resource.
//!
//! Categories are addressed by slug. The slug is derived from the name at
//! creation when omitted and is stable afterwards.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use learnhub_core::error::CoreError;
use learnhub_db::models::category::{CategoryFilter, CreateCategory, UpdateCategory};
use learnhub_db::repositories::{CategoryRepo, CourseRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories?is_active=&search=&ordering=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<CategoryFilter>,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /api/v1/categories/{slug}
///
/// Get a category with its course count.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_with_count(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found_key("Category", &slug))?;
    Ok(Json(DataResponse { data: category }))
}

/// PUT/PATCH /api/v1/categories/{slug}
///
/// Partially update a category. The slug itself is not updatable.
pub async fn update(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::update(&state.pool, &slug, &input)
        .await?
        .ok_or_else(|| CoreError::not_found_key("Category", &slug))?;
    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/categories/{slug}
pub async fn delete(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete(&state.pool, &slug).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found_key("Category", &slug).into())
    }
}

/// GET /api/v1/categories/{slug}/courses
///
/// List the courses in a category.
pub async fn courses(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let category_id = CategoryRepo::id_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found_key("Category", &slug))?;
    let courses = CourseRepo::list_by_category(&state.pool, category_id).await?;
    Ok(Json(DataResponse { data: courses }))
}
