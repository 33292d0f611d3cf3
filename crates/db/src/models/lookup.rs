//! Read-only reference tables: difficulty levels, course statuses,
//! lesson types, and enrollment statuses.
//!
//! These are seeded by migration and administered out of band; the API
//! exposes only list/retrieve for them.

use learnhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `difficulty_levels` table. Listed by `level_order`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DifficultyLevel {
    pub id: DbId,
    pub level_name: String,
    pub level_order: i16,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `course_statuses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseStatus {
    pub id: DbId,
    pub status_name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `lesson_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LessonType {
    pub id: DbId,
    pub type_name: String,
    pub icon: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `enrollment_statuses` table. The workflow expects
/// `active`, `completed`, and `cancelled` rows to exist (verified at
/// boot).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnrollmentStatus {
    pub id: DbId,
    pub status_name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
