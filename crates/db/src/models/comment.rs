//! Comment and review entity model and DTOs.

use learnhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `comments` table. A review is a comment with
/// `is_review = true` and a mandatory rating.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub content: String,
    pub rating: Option<i16>,
    pub is_review: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a comment. A submission flagged as a review must
/// carry a rating; that rule is enforced in the handler on top of the
/// range check here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComment {
    pub user_id: DbId,
    pub course_id: DbId,
    pub content: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: Option<i16>,
    pub is_review: Option<bool>,
}

/// DTO for updating a comment. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateComment {
    pub content: Option<String>,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: Option<i16>,
    pub is_review: Option<bool>,
}

/// Abbreviated projection for comment listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentListItem {
    pub id: DbId,
    pub user_username: String,
    pub content: String,
    pub rating: Option<i16>,
    pub is_review: bool,
    pub created_at: Timestamp,
}

/// Detail projection with user and course names resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentDetail {
    pub id: DbId,
    pub user_id: DbId,
    pub user_username: String,
    pub user_full_name: String,
    pub course_id: DbId,
    pub course_title: String,
    pub content: String,
    pub rating: Option<i16>,
    pub is_review: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Query parameters for `GET /comments`.
#[derive(Debug, Default, Deserialize)]
pub struct CommentFilter {
    pub user: Option<DbId>,
    pub course: Option<DbId>,
    pub rating: Option<i16>,
    pub is_review: Option<bool>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
