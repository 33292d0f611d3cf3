//! Repository for the `enrollments` table.
//!
//! Enrollment creation fans out one progress row per existing lesson, and
//! the workflow actions (progress update, current-lesson pointer, cancel)
//! all run as single statements or transactions so callers observe one
//! consistent enrollment state.

use learnhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::enrollment::{
    CreateEnrollment, Enrollment, EnrollmentDetail, EnrollmentDetailRow, EnrollmentFilter,
    EnrollmentListItem, UpdateEnrollment,
};
use crate::repositories::CourseRepo;

const COLUMNS: &str = "id, user_id, course_id, status_id, progress_percentage, \
    enrolled_at, completed_at, last_accessed_at, notes, current_lesson_id, \
    created_at, updated_at";

const LIST_SELECT: &str = "SELECT e.id, c.title AS course_title, \
        c.thumbnail AS course_thumbnail, s.status_name AS status_name, \
        e.progress_percentage, e.enrolled_at, e.last_accessed_at
     FROM enrollments e
     JOIN courses c ON c.id = e.course_id
     LEFT JOIN enrollment_statuses s ON s.id = e.status_id";

/// Provides CRUD and workflow operations for enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Whether an enrollment already exists for the (user, course) pair.
    pub async fn exists(pool: &PgPool, user_id: DbId, course_id: DbId) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM enrollments WHERE user_id = $1 AND course_id = $2")
                .bind(user_id)
                .bind(course_id)
                .fetch_optional(pool)
                .await?;
        Ok(row.is_some())
    }

    /// Insert a new enrollment with the given (already resolved) status
    /// and create one uncompleted progress row per existing lesson of the
    /// course, all in one transaction.
    ///
    /// The `uq_enrollments_user_course` constraint backstops the
    /// duplicate pre-check against concurrent inserts.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEnrollment,
        status_id: DbId,
    ) -> Result<Enrollment, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO enrollments (user_id, course_id, status_id, notes)
             VALUES ($1, $2, $3, COALESCE($4, ''))
             RETURNING {COLUMNS}"
        );
        let enrollment = sqlx::query_as::<_, Enrollment>(&query)
            .bind(input.user_id)
            .bind(input.course_id)
            .bind(status_id)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO lesson_progress (enrollment_id, lesson_id)
             SELECT $1, id FROM lessons WHERE course_id = $2",
        )
        .bind(enrollment.id)
        .bind(input.course_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(enrollment)
    }

    /// Find an enrollment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE id = $1");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Full detail projection with resolved names and the embedded course
    /// list projection.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<EnrollmentDetail>, sqlx::Error> {
        let Some(row) = sqlx::query_as::<_, EnrollmentDetailRow>(
            "SELECT e.id, e.user_id, u.username AS user_username,
                    COALESCE(NULLIF(BTRIM(u.first_name || ' ' || u.last_name), ''), u.username)
                        AS user_full_name,
                    e.course_id, c.title AS course_title,
                    e.status_id, s.status_name AS status_name,
                    e.progress_percentage, e.enrolled_at, e.completed_at,
                    e.last_accessed_at, e.notes,
                    e.current_lesson_id, cl.title AS current_lesson_title
             FROM enrollments e
             JOIN users u ON u.id = e.user_id
             JOIN courses c ON c.id = e.course_id
             LEFT JOIN enrollment_statuses s ON s.id = e.status_id
             LEFT JOIN lessons cl ON cl.id = e.current_lesson_id
             WHERE e.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        else {
            return Ok(None);
        };

        let Some(course_details) = CourseRepo::list_item_by_id(pool, row.course_id).await? else {
            return Ok(None);
        };
        Ok(Some(EnrollmentDetail {
            enrollment: row,
            course_details,
        }))
    }

    /// List enrollments with optional filters and whitelisted ordering.
    pub async fn list(
        pool: &PgPool,
        filter: &EnrollmentFilter,
    ) -> Result<Vec<EnrollmentListItem>, sqlx::Error> {
        let order = match filter.ordering.as_deref() {
            Some("progress_percentage") => "e.progress_percentage ASC",
            Some("-progress_percentage") => "e.progress_percentage DESC",
            Some("last_accessed_at") => "e.last_accessed_at ASC",
            Some("-last_accessed_at") => "e.last_accessed_at DESC",
            Some("-enrolled_at") => "e.enrolled_at DESC",
            _ => "e.enrolled_at ASC",
        };
        let query = format!(
            "{LIST_SELECT}
             WHERE ($1::bigint IS NULL OR e.user_id = $1)
               AND ($2::bigint IS NULL OR e.course_id = $2)
               AND ($3::bigint IS NULL OR e.status_id = $3)
             ORDER BY {order}"
        );
        sqlx::query_as::<_, EnrollmentListItem>(&query)
            .bind(filter.user)
            .bind(filter.course)
            .bind(filter.status)
            .fetch_all(pool)
            .await
    }

    /// List a user's enrollments.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<EnrollmentListItem>, sqlx::Error> {
        let query = format!("{LIST_SELECT} WHERE e.user_id = $1 ORDER BY e.enrolled_at ASC");
        sqlx::query_as::<_, EnrollmentListItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List a course's enrollments.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<EnrollmentListItem>, sqlx::Error> {
        let query = format!("{LIST_SELECT} WHERE e.course_id = $1 ORDER BY e.enrolled_at ASC");
        sqlx::query_as::<_, EnrollmentListItem>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Update notes/status through the plain CRUD path.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEnrollment,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "UPDATE enrollments SET
                status_id = COALESCE($2, status_id),
                notes = COALESCE($3, notes),
                last_accessed_at = NOW(),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .bind(input.status_id)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Set the progress percentage directly.
    ///
    /// When `completed_status_id` is `Some` (the caller resolved the
    /// `completed` lookup because the new value is exactly 100), the
    /// status transitions and the completion time is stamped in the same
    /// statement. Values below 100 never touch status or completion time,
    /// so a prior completed state is not reversed.
    pub async fn update_progress(
        pool: &PgPool,
        id: DbId,
        percentage: f64,
        completed_status_id: Option<DbId>,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let stamp_completion = percentage == 100.0;
        let query = format!(
            "UPDATE enrollments SET
                progress_percentage = $2,
                status_id = COALESCE($3, status_id),
                completed_at = CASE WHEN $4 THEN NOW() ELSE completed_at END,
                last_accessed_at = NOW(),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .bind(percentage)
            .bind(completed_status_id)
            .bind(stamp_completion)
            .fetch_optional(pool)
            .await
    }

    /// Point the enrollment at a new current lesson. The caller must have
    /// verified the lesson belongs to the enrollment's course.
    pub async fn set_current_lesson(
        pool: &PgPool,
        id: DbId,
        lesson_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "UPDATE enrollments SET
                current_lesson_id = $2,
                last_accessed_at = NOW(),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .bind(lesson_id)
            .fetch_optional(pool)
            .await
    }

    /// Transition the enrollment to the given (already resolved)
    /// cancelled status.
    pub async fn cancel(
        pool: &PgPool,
        id: DbId,
        cancelled_status_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "UPDATE enrollments SET
                status_id = $2,
                last_accessed_at = NOW(),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .bind(cancelled_status_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an enrollment by ID. Cascades to its progress rows.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
