//! Repositories for the read-only lookup tables.

use learnhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::lookup::{CourseStatus, DifficultyLevel, EnrollmentStatus, LessonType};

const DIFFICULTY_COLUMNS: &str =
    "id, level_name, level_order, description, created_at, updated_at";
const STATUS_COLUMNS: &str = "id, status_name, description, created_at, updated_at";
const TYPE_COLUMNS: &str = "id, type_name, icon, description, created_at, updated_at";

/// Read access to the `difficulty_levels` table.
pub struct DifficultyLevelRepo;

impl DifficultyLevelRepo {
    /// List all levels, ordered by `level_order` ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<DifficultyLevel>, sqlx::Error> {
        let query =
            format!("SELECT {DIFFICULTY_COLUMNS} FROM difficulty_levels ORDER BY level_order ASC");
        sqlx::query_as::<_, DifficultyLevel>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DifficultyLevel>, sqlx::Error> {
        let query = format!("SELECT {DIFFICULTY_COLUMNS} FROM difficulty_levels WHERE id = $1");
        sqlx::query_as::<_, DifficultyLevel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

/// Read access to the `course_statuses` table.
pub struct CourseStatusRepo;

impl CourseStatusRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<CourseStatus>, sqlx::Error> {
        let query = format!("SELECT {STATUS_COLUMNS} FROM course_statuses ORDER BY id ASC");
        sqlx::query_as::<_, CourseStatus>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CourseStatus>, sqlx::Error> {
        let query = format!("SELECT {STATUS_COLUMNS} FROM course_statuses WHERE id = $1");
        sqlx::query_as::<_, CourseStatus>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

/// Read access to the `lesson_types` table.
pub struct LessonTypeRepo;

impl LessonTypeRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<LessonType>, sqlx::Error> {
        let query = format!("SELECT {TYPE_COLUMNS} FROM lesson_types ORDER BY id ASC");
        sqlx::query_as::<_, LessonType>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LessonType>, sqlx::Error> {
        let query = format!("SELECT {TYPE_COLUMNS} FROM lesson_types WHERE id = $1");
        sqlx::query_as::<_, LessonType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

/// Read access to the `enrollment_statuses` table. The enrollment
/// workflow resolves its canonical states here by case-insensitive name.
pub struct EnrollmentStatusRepo;

impl EnrollmentStatusRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<EnrollmentStatus>, sqlx::Error> {
        let query = format!("SELECT {STATUS_COLUMNS} FROM enrollment_statuses ORDER BY id ASC");
        sqlx::query_as::<_, EnrollmentStatus>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EnrollmentStatus>, sqlx::Error> {
        let query = format!("SELECT {STATUS_COLUMNS} FROM enrollment_statuses WHERE id = $1");
        sqlx::query_as::<_, EnrollmentStatus>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive lookup by status name (`active`, `completed`,
    /// `cancelled`). A `None` here after boot verification indicates the
    /// row was removed at runtime.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<EnrollmentStatus>, sqlx::Error> {
        let query = format!(
            "SELECT {STATUS_COLUMNS} FROM enrollment_statuses WHERE LOWER(status_name) = LOWER($1)"
        );
        sqlx::query_as::<_, EnrollmentStatus>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
