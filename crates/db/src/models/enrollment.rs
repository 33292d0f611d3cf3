//! Enrollment entity model, DTOs, and workflow request bodies.

use learnhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::course::CourseListItem;

/// A row from the `enrollments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub status_id: Option<DbId>,
    pub progress_percentage: f64,
    pub enrolled_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub last_accessed_at: Timestamp,
    pub notes: String,
    pub current_lesson_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an enrollment. Status is resolved to the `active`
/// lookup row; one progress record per existing lesson is created in the
/// same transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnrollment {
    pub user_id: DbId,
    pub course_id: DbId,
    pub notes: Option<String>,
}

/// DTO for updating an enrollment through the plain CRUD path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEnrollment {
    pub status_id: Option<DbId>,
    pub notes: Option<String>,
}

/// Abbreviated projection for enrollment listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnrollmentListItem {
    pub id: DbId,
    pub course_title: String,
    pub course_thumbnail: Option<String>,
    pub status_name: Option<String>,
    pub progress_percentage: f64,
    pub enrolled_at: Timestamp,
    pub last_accessed_at: Timestamp,
}

/// Enrollment row plus resolved names, fetched in one query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnrollmentDetailRow {
    pub id: DbId,
    pub user_id: DbId,
    pub user_username: String,
    pub user_full_name: String,
    pub course_id: DbId,
    pub course_title: String,
    pub status_id: Option<DbId>,
    pub status_name: Option<String>,
    pub progress_percentage: f64,
    pub enrolled_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub last_accessed_at: Timestamp,
    pub notes: String,
    pub current_lesson_id: Option<DbId>,
    pub current_lesson_title: Option<String>,
}

/// Detail response for an enrollment: the detail row plus the embedded
/// course list projection.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentDetail {
    #[serde(flatten)]
    pub enrollment: EnrollmentDetailRow,
    pub course_details: CourseListItem,
}

/// Body for `PATCH /enrollments/{id}/update_progress`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProgressRequest {
    #[validate(range(min = 0.0, max = 100.0, message = "progress must be between 0 and 100"))]
    pub progress_percentage: f64,
}

/// Body for `PATCH /enrollments/{id}/update_current_lesson`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCurrentLessonRequest {
    pub lesson_id: DbId,
}

/// Query parameters for `GET /enrollments`.
#[derive(Debug, Default, Deserialize)]
pub struct EnrollmentFilter {
    pub user: Option<DbId>,
    pub course: Option<DbId>,
    pub status: Option<DbId>,
    pub ordering: Option<String>,
}
