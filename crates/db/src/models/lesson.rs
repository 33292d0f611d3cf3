//! Lesson entity model and DTOs.

use learnhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `lessons` table. Ordered by `order_index` within a
/// course; duplicate order values are permitted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lesson {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub description: String,
    pub lesson_type_id: Option<DbId>,
    pub content: String,
    pub video_url: Option<String>,
    pub duration_minutes: i32,
    pub order_index: i32,
    pub is_published: bool,
    pub is_free: bool,
    pub attachments: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a lesson.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLesson {
    pub course_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub lesson_type_id: Option<DbId>,
    pub content: Option<String>,
    pub video_url: Option<String>,
    pub duration_minutes: Option<i32>,
    pub order_index: Option<i32>,
    pub is_published: Option<bool>,
    pub is_free: Option<bool>,
    pub attachments: Option<serde_json::Value>,
}

/// DTO for updating a lesson. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLesson {
    pub title: Option<String>,
    pub description: Option<String>,
    pub lesson_type_id: Option<DbId>,
    pub content: Option<String>,
    pub video_url: Option<String>,
    pub duration_minutes: Option<i32>,
    pub order_index: Option<i32>,
    pub is_published: Option<bool>,
    pub is_free: Option<bool>,
    pub attachments: Option<serde_json::Value>,
}

/// Abbreviated projection for lesson listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LessonListItem {
    pub id: DbId,
    pub title: String,
    pub lesson_type_name: Option<String>,
    pub duration_minutes: i32,
    pub order_index: i32,
    pub is_published: bool,
    pub is_free: bool,
}

/// Detail projection with resolved course and type names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LessonDetail {
    pub id: DbId,
    pub course_id: DbId,
    pub course_title: String,
    pub title: String,
    pub description: String,
    pub lesson_type_id: Option<DbId>,
    pub lesson_type_name: Option<String>,
    pub content: String,
    pub video_url: Option<String>,
    pub duration_minutes: i32,
    pub order_index: i32,
    pub is_published: bool,
    pub is_free: bool,
    pub attachments: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Query parameters for `GET /lessons`.
#[derive(Debug, Default, Deserialize)]
pub struct LessonFilter {
    pub course: Option<DbId>,
    pub lesson_type: Option<DbId>,
    pub is_published: Option<bool>,
    pub is_free: Option<bool>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
