//! Repository for the `courses` table.
//!
//! Courses are addressed externally by slug. List and detail projections
//! resolve instructor/category/difficulty names and compute lesson and
//! enrollment counts plus the average review rating in SQL, so every
//! surface shares one definition of those derived numbers.

use learnhub_core::slug::slugify;
use learnhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{
    Course, CourseDetail, CourseDetailRow, CourseFilter, CourseListItem, CourseStats,
    CreateCourse, UpdateCourse,
};
use crate::repositories::LessonRepo;

const COLUMNS: &str = "id, title, slug, description, instructor_id, category_id, \
    difficulty_level_id, status_id, thumbnail, price, duration_hours, language, \
    requirements, learning_objectives, published_at, created_at, updated_at";

/// Display name for an instructor: full name, falling back to username.
const INSTRUCTOR_NAME: &str =
    "COALESCE(NULLIF(BTRIM(u.first_name || ' ' || u.last_name), ''), u.username)";

/// Mean rating over rated reviews of the course, rounded to 2 decimals;
/// NULL when no such reviews exist.
const AVERAGE_RATING: &str = "(SELECT ROUND(AVG(cm.rating)::numeric, 2)::float8
        FROM comments cm
        WHERE cm.course_id = c.id AND cm.is_review AND cm.rating IS NOT NULL)";

/// Shared FROM/JOIN clause for projection queries.
const PROJECTION_FROM: &str = "FROM courses c
     JOIN users u ON u.id = c.instructor_id
     JOIN categories cat ON cat.id = c.category_id
     LEFT JOIN difficulty_levels dl ON dl.id = c.difficulty_level_id";

fn list_select() -> String {
    format!(
        "SELECT c.id, c.title, c.slug,
                {INSTRUCTOR_NAME} AS instructor_name,
                cat.name AS category_name,
                dl.level_name AS difficulty_name,
                c.thumbnail, c.price, c.duration_hours,
                (SELECT COUNT(*) FROM lessons l WHERE l.course_id = c.id) AS total_lessons,
                (SELECT COUNT(*) FROM enrollments e WHERE e.course_id = c.id) AS total_enrollments,
                {AVERAGE_RATING} AS average_rating
         {PROJECTION_FROM}"
    )
}

/// Provides CRUD and derived-read operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, deriving the slug from the title when the
    /// input does not supply one.
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let slug = match &input.slug {
            Some(slug) => slug.clone(),
            None => slugify(&input.title),
        };
        let query = format!(
            "INSERT INTO courses
                (title, slug, description, instructor_id, category_id,
                 difficulty_level_id, status_id, thumbnail, price, duration_hours,
                 language, requirements, learning_objectives, published_at)
             VALUES ($1, $2, COALESCE($3, ''), $4, $5, $6, $7, $8,
                     COALESCE($9, 0), COALESCE($10, 0), COALESCE($11, 'en'),
                     COALESCE($12, ''), COALESCE($13, ''), $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.description)
            .bind(input.instructor_id)
            .bind(input.category_id)
            .bind(input.difficulty_level_id)
            .bind(input.status_id)
            .bind(&input.thumbnail)
            .bind(input.price)
            .bind(input.duration_hours)
            .bind(&input.language)
            .bind(&input.requirements)
            .bind(&input.learning_objectives)
            .bind(input.published_at)
            .fetch_one(pool)
            .await
    }

    /// Find a course row by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE slug = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Full detail projection by slug, with the ordered lesson list
    /// attached.
    pub async fn find_detail(pool: &PgPool, slug: &str) -> Result<Option<CourseDetail>, sqlx::Error> {
        let query = format!(
            "SELECT c.id, c.title, c.slug, c.description,
                    c.instructor_id, {INSTRUCTOR_NAME} AS instructor_name,
                    c.category_id, cat.name AS category_name,
                    c.difficulty_level_id, dl.level_name AS difficulty_name,
                    c.status_id, cs.status_name AS status_name,
                    c.thumbnail, c.price, c.duration_hours, c.language,
                    c.requirements, c.learning_objectives, c.published_at,
                    (SELECT COUNT(*) FROM lessons l WHERE l.course_id = c.id) AS total_lessons,
                    (SELECT COUNT(*) FROM enrollments e WHERE e.course_id = c.id) AS total_enrollments,
                    {AVERAGE_RATING} AS average_rating,
                    c.created_at, c.updated_at
             {PROJECTION_FROM}
             LEFT JOIN course_statuses cs ON cs.id = c.status_id
             WHERE c.slug = $1"
        );
        let Some(course) = sqlx::query_as::<_, CourseDetailRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let lessons = LessonRepo::list_items_by_course(pool, course.id).await?;
        Ok(Some(CourseDetail { course, lessons }))
    }

    /// List courses with optional filters, search, and whitelisted
    /// ordering.
    pub async fn list(
        pool: &PgPool,
        filter: &CourseFilter,
    ) -> Result<Vec<CourseListItem>, sqlx::Error> {
        let order = match filter.ordering.as_deref() {
            Some("price") => "c.price ASC",
            Some("-price") => "c.price DESC",
            Some("title") => "c.title ASC",
            Some("-title") => "c.title DESC",
            Some("published_at") => "c.published_at ASC",
            Some("-published_at") => "c.published_at DESC",
            Some("-created_at") => "c.created_at DESC",
            _ => "c.created_at ASC",
        };
        let query = format!(
            "{select}
             WHERE ($1::bigint IS NULL OR c.category_id = $1)
               AND ($2::bigint IS NULL OR c.difficulty_level_id = $2)
               AND ($3::bigint IS NULL OR c.status_id = $3)
               AND ($4::bigint IS NULL OR c.instructor_id = $4)
               AND ($5::text IS NULL OR c.language = $5)
               AND ($6::text IS NULL
                    OR c.title ILIKE '%' || $6 || '%'
                    OR c.description ILIKE '%' || $6 || '%'
                    OR c.requirements ILIKE '%' || $6 || '%'
                    OR c.learning_objectives ILIKE '%' || $6 || '%')
             ORDER BY {order}",
            select = list_select()
        );
        sqlx::query_as::<_, CourseListItem>(&query)
            .bind(filter.category)
            .bind(filter.difficulty_level)
            .bind(filter.status)
            .bind(filter.instructor)
            .bind(&filter.language)
            .bind(&filter.search)
            .fetch_all(pool)
            .await
    }

    /// List only courses with a publication timestamp.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<CourseListItem>, sqlx::Error> {
        let query = format!(
            "{select} WHERE c.published_at IS NOT NULL ORDER BY c.published_at DESC",
            select = list_select()
        );
        sqlx::query_as::<_, CourseListItem>(&query).fetch_all(pool).await
    }

    /// List courses belonging to a category.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<CourseListItem>, sqlx::Error> {
        let query = format!(
            "{select} WHERE c.category_id = $1 ORDER BY c.created_at ASC",
            select = list_select()
        );
        sqlx::query_as::<_, CourseListItem>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// List courses taught by an instructor.
    pub async fn list_by_instructor(
        pool: &PgPool,
        instructor_id: DbId,
    ) -> Result<Vec<CourseListItem>, sqlx::Error> {
        let query = format!(
            "{select} WHERE c.instructor_id = $1 ORDER BY c.created_at ASC",
            select = list_select()
        );
        sqlx::query_as::<_, CourseListItem>(&query)
            .bind(instructor_id)
            .fetch_all(pool)
            .await
    }

    /// List projection for a single course by its internal ID. Used to
    /// embed `course_details` in enrollment responses.
    pub async fn list_item_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CourseListItem>, sqlx::Error> {
        let query = format!("{select} WHERE c.id = $1", select = list_select());
        sqlx::query_as::<_, CourseListItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a course addressed by slug. The slug itself never changes.
    pub async fn update(
        pool: &PgPool,
        slug: &str,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                instructor_id = COALESCE($4, instructor_id),
                category_id = COALESCE($5, category_id),
                difficulty_level_id = COALESCE($6, difficulty_level_id),
                status_id = COALESCE($7, status_id),
                thumbnail = COALESCE($8, thumbnail),
                price = COALESCE($9, price),
                duration_hours = COALESCE($10, duration_hours),
                language = COALESCE($11, language),
                requirements = COALESCE($12, requirements),
                learning_objectives = COALESCE($13, learning_objectives),
                published_at = COALESCE($14, published_at),
                updated_at = NOW()
             WHERE slug = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.instructor_id)
            .bind(input.category_id)
            .bind(input.difficulty_level_id)
            .bind(input.status_id)
            .bind(&input.thumbnail)
            .bind(input.price)
            .bind(input.duration_hours)
            .bind(&input.language)
            .bind(&input.requirements)
            .bind(&input.learning_objectives)
            .bind(input.published_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a course by slug. Cascades to lessons, enrollments,
    /// progress records, and comments via foreign keys. Returns `true`
    /// if a row was removed.
    pub async fn delete(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE slug = $1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Aggregate statistics for a course addressed by slug.
    pub async fn stats(pool: &PgPool, slug: &str) -> Result<Option<CourseStats>, sqlx::Error> {
        let Some(course) = Self::find_by_slug(pool, slug).await? else {
            return Ok(None);
        };
        let row: (i64, i64, i64, i64, i64, Option<f64>) = sqlx::query_as(
            "SELECT
                (SELECT COUNT(*) FROM enrollments e WHERE e.course_id = $1),
                (SELECT COUNT(*) FROM enrollments e
                   JOIN enrollment_statuses s ON s.id = e.status_id
                  WHERE e.course_id = $1 AND LOWER(s.status_name) = 'active'),
                (SELECT COUNT(*) FROM enrollments e
                   JOIN enrollment_statuses s ON s.id = e.status_id
                  WHERE e.course_id = $1 AND LOWER(s.status_name) = 'completed'),
                (SELECT COUNT(*) FROM lessons l WHERE l.course_id = $1),
                (SELECT COUNT(*) FROM comments cm
                  WHERE cm.course_id = $1 AND cm.is_review AND cm.rating IS NOT NULL),
                (SELECT ROUND(AVG(cm.rating)::numeric, 2)::float8 FROM comments cm
                  WHERE cm.course_id = $1 AND cm.is_review AND cm.rating IS NOT NULL)",
        )
        .bind(course.id)
        .fetch_one(pool)
        .await?;

        Ok(Some(CourseStats {
            total_enrollments: row.0,
            active_enrollments: row.1,
            completed_enrollments: row.2,
            total_lessons: row.3,
            total_reviews: row.4,
            average_rating: row.5,
            total_duration_hours: course.duration_hours,
        }))
    }

    /// Resolve a course's internal ID from its slug.
    pub async fn id_by_slug(pool: &PgPool, slug: &str) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM courses WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|(id,)| id))
    }
}
