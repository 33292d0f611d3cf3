//! Repository for the `lesson_progress` table.

use learnhub_core::progress::completion_percentage;
use learnhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::lesson_progress::{
    CreateLessonProgress, LessonProgress, LessonProgressFilter, LessonProgressItem,
    UpdateLessonProgress,
};

const COLUMNS: &str = "id, enrollment_id, lesson_id, is_completed, time_spent_minutes, \
    completed_at, last_accessed_at, created_at, updated_at";

const ITEM_SELECT: &str = "SELECT lp.id, lp.enrollment_id, lp.lesson_id, \
        l.title AS lesson_title, u.username AS user_username, lp.is_completed, \
        lp.time_spent_minutes, lp.completed_at, lp.last_accessed_at
     FROM lesson_progress lp
     JOIN lessons l ON l.id = lp.lesson_id
     JOIN enrollments e ON e.id = lp.enrollment_id
     JOIN users u ON u.id = e.user_id";

/// Provides CRUD operations for per-lesson progress plus the
/// `complete` workflow action.
pub struct LessonProgressRepo;

impl LessonProgressRepo {
    /// Insert a progress row directly. Normal creation happens as part of
    /// enrollment fan-out; this path exists for the plain CRUD surface.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLessonProgress,
    ) -> Result<LessonProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO lesson_progress (enrollment_id, lesson_id, time_spent_minutes)
             VALUES ($1, $2, COALESCE($3, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(input.enrollment_id)
            .bind(input.lesson_id)
            .bind(input.time_spent_minutes)
            .fetch_one(pool)
            .await
    }

    /// Find a progress row by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LessonProgress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lesson_progress WHERE id = $1");
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List progress rows with optional filters.
    pub async fn list(
        pool: &PgPool,
        filter: &LessonProgressFilter,
    ) -> Result<Vec<LessonProgressItem>, sqlx::Error> {
        let query = format!(
            "{ITEM_SELECT}
             WHERE ($1::bigint IS NULL OR lp.enrollment_id = $1)
               AND ($2::bigint IS NULL OR lp.lesson_id = $2)
               AND ($3::boolean IS NULL OR lp.is_completed = $3)
             ORDER BY lp.id ASC"
        );
        sqlx::query_as::<_, LessonProgressItem>(&query)
            .bind(filter.enrollment)
            .bind(filter.lesson)
            .bind(filter.is_completed)
            .fetch_all(pool)
            .await
    }

    /// List all progress rows for an enrollment, in lesson order.
    pub async fn list_by_enrollment(
        pool: &PgPool,
        enrollment_id: DbId,
    ) -> Result<Vec<LessonProgressItem>, sqlx::Error> {
        let query = format!(
            "{ITEM_SELECT}
             WHERE lp.enrollment_id = $1
             ORDER BY l.order_index ASC, l.id ASC"
        );
        sqlx::query_as::<_, LessonProgressItem>(&query)
            .bind(enrollment_id)
            .fetch_all(pool)
            .await
    }

    /// Update a progress row through the plain CRUD path. Does not
    /// recompute the enrollment percentage; only [`Self::complete`] does.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLessonProgress,
    ) -> Result<Option<LessonProgress>, sqlx::Error> {
        let query = format!(
            "UPDATE lesson_progress SET
                is_completed = COALESCE($2, is_completed),
                time_spent_minutes = COALESCE($3, time_spent_minutes),
                last_accessed_at = NOW(),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(id)
            .bind(input.is_completed)
            .bind(input.time_spent_minutes)
            .fetch_optional(pool)
            .await
    }

    /// Mark a progress row completed and recompute the owning
    /// enrollment's percentage from completed-lesson counts, in one
    /// transaction.
    ///
    /// The recompute is skipped when the course has no lessons (nothing
    /// to divide by), and it never transitions the enrollment status.
    pub async fn complete(pool: &PgPool, id: DbId) -> Result<Option<LessonProgress>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE lesson_progress SET
                is_completed = TRUE,
                completed_at = NOW(),
                last_accessed_at = NOW(),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(progress) = sqlx::query_as::<_, LessonProgress>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let (completed, total): (i64, i64) = sqlx::query_as(
            "SELECT
                (SELECT COUNT(*) FROM lesson_progress lp
                  WHERE lp.enrollment_id = $1 AND lp.is_completed),
                (SELECT COUNT(*) FROM lessons l
                  WHERE l.course_id = (SELECT course_id FROM enrollments WHERE id = $1))",
        )
        .bind(progress.enrollment_id)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(percentage) = completion_percentage(completed, total) {
            sqlx::query(
                "UPDATE enrollments SET
                    progress_percentage = $2,
                    last_accessed_at = NOW(),
                    updated_at = NOW()
                 WHERE id = $1",
            )
            .bind(progress.enrollment_id)
            .bind(percentage)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(Some(progress))
    }

    /// Delete a progress row by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lesson_progress WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
