//! Repository for the `lessons` table.

use learnhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::lesson::{
    CreateLesson, Lesson, LessonDetail, LessonFilter, LessonListItem, UpdateLesson,
};

const COLUMNS: &str = "id, course_id, title, description, lesson_type_id, content, \
    video_url, duration_minutes, order_index, is_published, is_free, attachments, \
    created_at, updated_at";

const LIST_COLUMNS: &str = "l.id, l.title, lt.type_name AS lesson_type_name, \
    l.duration_minutes, l.order_index, l.is_published, l.is_free";

/// Provides CRUD operations for lessons.
pub struct LessonRepo;

impl LessonRepo {
    /// Insert a new lesson.
    pub async fn create(pool: &PgPool, input: &CreateLesson) -> Result<Lesson, sqlx::Error> {
        let query = format!(
            "INSERT INTO lessons
                (course_id, title, description, lesson_type_id, content, video_url,
                 duration_minutes, order_index, is_published, is_free, attachments)
             VALUES ($1, $2, COALESCE($3, ''), $4, COALESCE($5, ''), $6,
                     COALESCE($7, 0), COALESCE($8, 0), COALESCE($9, FALSE),
                     COALESCE($10, FALSE), COALESCE($11, '[]'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(input.course_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.lesson_type_id)
            .bind(&input.content)
            .bind(&input.video_url)
            .bind(input.duration_minutes)
            .bind(input.order_index)
            .bind(input.is_published)
            .bind(input.is_free)
            .bind(&input.attachments)
            .fetch_one(pool)
            .await
    }

    /// Find a lesson by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lessons WHERE id = $1");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a lesson only if it belongs to the given course. Used when
    /// setting an enrollment's current-lesson pointer.
    pub async fn find_in_course(
        pool: &PgPool,
        id: DbId,
        course_id: DbId,
    ) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lessons WHERE id = $1 AND course_id = $2");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// Detail projection with course and type names resolved.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<LessonDetail>, sqlx::Error> {
        sqlx::query_as::<_, LessonDetail>(
            "SELECT l.id, l.course_id, c.title AS course_title, l.title, l.description,
                    l.lesson_type_id, lt.type_name AS lesson_type_name, l.content,
                    l.video_url, l.duration_minutes, l.order_index, l.is_published,
                    l.is_free, l.attachments, l.created_at, l.updated_at
             FROM lessons l
             JOIN courses c ON c.id = l.course_id
             LEFT JOIN lesson_types lt ON lt.id = l.lesson_type_id
             WHERE l.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List lessons with optional filters, search, and whitelisted
    /// ordering.
    pub async fn list(
        pool: &PgPool,
        filter: &LessonFilter,
    ) -> Result<Vec<LessonListItem>, sqlx::Error> {
        let order = match filter.ordering.as_deref() {
            Some("created_at") => "l.created_at ASC",
            Some("-created_at") => "l.created_at DESC",
            Some("duration_minutes") => "l.duration_minutes ASC",
            Some("-duration_minutes") => "l.duration_minutes DESC",
            Some("-order_index") => "l.order_index DESC, l.id DESC",
            _ => "l.order_index ASC, l.id ASC",
        };
        let query = format!(
            "SELECT {LIST_COLUMNS}
             FROM lessons l
             LEFT JOIN lesson_types lt ON lt.id = l.lesson_type_id
             WHERE ($1::bigint IS NULL OR l.course_id = $1)
               AND ($2::bigint IS NULL OR l.lesson_type_id = $2)
               AND ($3::boolean IS NULL OR l.is_published = $3)
               AND ($4::boolean IS NULL OR l.is_free = $4)
               AND ($5::text IS NULL
                    OR l.title ILIKE '%' || $5 || '%'
                    OR l.description ILIKE '%' || $5 || '%'
                    OR l.content ILIKE '%' || $5 || '%')
             ORDER BY {order}"
        );
        sqlx::query_as::<_, LessonListItem>(&query)
            .bind(filter.course)
            .bind(filter.lesson_type)
            .bind(filter.is_published)
            .bind(filter.is_free)
            .bind(&filter.search)
            .fetch_all(pool)
            .await
    }

    /// Ordered list projection for a course's lessons (nested views).
    pub async fn list_items_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<LessonListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {LIST_COLUMNS}
             FROM lessons l
             LEFT JOIN lesson_types lt ON lt.id = l.lesson_type_id
             WHERE l.course_id = $1
             ORDER BY l.order_index ASC, l.id ASC"
        );
        sqlx::query_as::<_, LessonListItem>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Update a lesson. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLesson,
    ) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!(
            "UPDATE lessons SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                lesson_type_id = COALESCE($4, lesson_type_id),
                content = COALESCE($5, content),
                video_url = COALESCE($6, video_url),
                duration_minutes = COALESCE($7, duration_minutes),
                order_index = COALESCE($8, order_index),
                is_published = COALESCE($9, is_published),
                is_free = COALESCE($10, is_free),
                attachments = COALESCE($11, attachments),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.lesson_type_id)
            .bind(&input.content)
            .bind(&input.video_url)
            .bind(input.duration_minutes)
            .bind(input.order_index)
            .bind(input.is_published)
            .bind(input.is_free)
            .bind(&input.attachments)
            .fetch_optional(pool)
            .await
    }

    /// Delete a lesson by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
