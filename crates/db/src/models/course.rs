//! Course entity model, DTOs, and derived projections.

use learnhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::lesson::LessonListItem;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub instructor_id: DbId,
    pub category_id: DbId,
    pub difficulty_level_id: Option<DbId>,
    pub status_id: Option<DbId>,
    pub thumbnail: Option<String>,
    pub price: f64,
    pub duration_hours: i32,
    pub language: String,
    pub requirements: String,
    pub learning_objectives: String,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a course. When `slug` is omitted it is derived from
/// `title`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub instructor_id: DbId,
    pub category_id: DbId,
    pub difficulty_level_id: Option<DbId>,
    pub status_id: Option<DbId>,
    pub thumbnail: Option<String>,
    pub price: Option<f64>,
    pub duration_hours: Option<i32>,
    pub language: Option<String>,
    pub requirements: Option<String>,
    pub learning_objectives: Option<String>,
    pub published_at: Option<Timestamp>,
}

/// DTO for updating a course. All fields are optional; the slug is
/// stable once set and is not updatable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructor_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub difficulty_level_id: Option<DbId>,
    pub status_id: Option<DbId>,
    pub thumbnail: Option<String>,
    pub price: Option<f64>,
    pub duration_hours: Option<i32>,
    pub language: Option<String>,
    pub requirements: Option<String>,
    pub learning_objectives: Option<String>,
    pub published_at: Option<Timestamp>,
}

/// Abbreviated projection for course listings. Names are resolved from
/// foreign keys and the counts/average are computed per request.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseListItem {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub instructor_name: String,
    pub category_name: String,
    pub difficulty_name: Option<String>,
    pub thumbnail: Option<String>,
    pub price: f64,
    pub duration_hours: i32,
    pub total_lessons: i64,
    pub total_enrollments: i64,
    pub average_rating: Option<f64>,
}

/// Full course row plus resolved names and derived numbers. Fetched in a
/// single query; the nested lesson list is attached separately to form
/// [`CourseDetail`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseDetailRow {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub instructor_id: DbId,
    pub instructor_name: String,
    pub category_id: DbId,
    pub category_name: String,
    pub difficulty_level_id: Option<DbId>,
    pub difficulty_name: Option<String>,
    pub status_id: Option<DbId>,
    pub status_name: Option<String>,
    pub thumbnail: Option<String>,
    pub price: f64,
    pub duration_hours: i32,
    pub language: String,
    pub requirements: String,
    pub learning_objectives: String,
    pub published_at: Option<Timestamp>,
    pub total_lessons: i64,
    pub total_enrollments: i64,
    pub average_rating: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Detail response for a course: the detail row plus its ordered lessons.
#[derive(Debug, Clone, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: CourseDetailRow,
    pub lessons: Vec<LessonListItem>,
}

/// Aggregate statistics for a course.
#[derive(Debug, Clone, Serialize)]
pub struct CourseStats {
    pub total_enrollments: i64,
    pub active_enrollments: i64,
    pub completed_enrollments: i64,
    pub total_lessons: i64,
    pub total_reviews: i64,
    pub average_rating: Option<f64>,
    pub total_duration_hours: i32,
}

/// Query parameters for `GET /courses`.
#[derive(Debug, Default, Deserialize)]
pub struct CourseFilter {
    pub category: Option<DbId>,
    pub difficulty_level: Option<DbId>,
    pub status: Option<DbId>,
    pub instructor: Option<DbId>,
    pub language: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
