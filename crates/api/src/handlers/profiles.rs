//! Handlers for the `/profiles` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_db::models::user::{ProfileFilter, UpdateProfile};
use learnhub_db::repositories::ProfileRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profiles?is_instructor=&search=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ProfileFilter>,
) -> AppResult<impl IntoResponse> {
    let profiles = ProfileRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: profiles }))
}

/// GET /api/v1/profiles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Profile", id))?;
    Ok(Json(DataResponse { data: profile }))
}

/// PUT/PATCH /api/v1/profiles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Profile", id))?;
    Ok(Json(DataResponse { data: profile }))
}

/// DELETE /api/v1/profiles/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProfileRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Profile", id).into())
    }
}
