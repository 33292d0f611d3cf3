//! Per-lesson progress entity model and DTOs.

use learnhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `lesson_progress` table. At most one per
/// (enrollment, lesson) pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LessonProgress {
    pub id: DbId,
    pub enrollment_id: DbId,
    pub lesson_id: DbId,
    pub is_completed: bool,
    pub time_spent_minutes: i32,
    pub completed_at: Option<Timestamp>,
    pub last_accessed_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a progress row directly through CRUD. Rows are
/// normally fanned out by enrollment creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLessonProgress {
    pub enrollment_id: DbId,
    pub lesson_id: DbId,
    pub time_spent_minutes: Option<i32>,
}

/// DTO for updating a progress row. Plain CRUD updates do not recompute
/// the enrollment percentage; only the `complete` action does.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLessonProgress {
    pub is_completed: Option<bool>,
    pub time_spent_minutes: Option<i32>,
}

/// Projection with the lesson title and enrolled username resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LessonProgressItem {
    pub id: DbId,
    pub enrollment_id: DbId,
    pub lesson_id: DbId,
    pub lesson_title: String,
    pub user_username: String,
    pub is_completed: bool,
    pub time_spent_minutes: i32,
    pub completed_at: Option<Timestamp>,
    pub last_accessed_at: Timestamp,
}

/// Query parameters for `GET /lesson-progress`.
#[derive(Debug, Default, Deserialize)]
pub struct LessonProgressFilter {
    pub enrollment: Option<DbId>,
    pub lesson: Option<DbId>,
    pub is_completed: Option<bool>,
}
