//! Repository for the `comments` table.

use learnhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{
    Comment, CommentDetail, CommentFilter, CommentListItem, CreateComment, UpdateComment,
};

const COLUMNS: &str =
    "id, user_id, course_id, content, rating, is_review, created_at, updated_at";

const LIST_SELECT: &str = "SELECT cm.id, u.username AS user_username, cm.content, \
        cm.rating, cm.is_review, cm.created_at
     FROM comments cm
     JOIN users u ON u.id = cm.user_id";

/// Provides CRUD operations for comments and reviews.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment. The review-requires-rating rule is enforced
    /// by the API layer before this is called.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (user_id, course_id, content, rating, is_review)
             VALUES ($1, $2, $3, $4, COALESCE($5, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.user_id)
            .bind(input.course_id)
            .bind(&input.content)
            .bind(input.rating)
            .bind(input.is_review)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Detail projection with user and course names resolved.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<CommentDetail>, sqlx::Error> {
        sqlx::query_as::<_, CommentDetail>(
            "SELECT cm.id, cm.user_id, u.username AS user_username,
                    COALESCE(NULLIF(BTRIM(u.first_name || ' ' || u.last_name), ''), u.username)
                        AS user_full_name,
                    cm.course_id, c.title AS course_title, cm.content, cm.rating,
                    cm.is_review, cm.created_at, cm.updated_at
             FROM comments cm
             JOIN users u ON u.id = cm.user_id
             JOIN courses c ON c.id = cm.course_id
             WHERE cm.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List comments with optional filters, search, and whitelisted
    /// ordering.
    pub async fn list(
        pool: &PgPool,
        filter: &CommentFilter,
    ) -> Result<Vec<CommentListItem>, sqlx::Error> {
        let order = match filter.ordering.as_deref() {
            Some("rating") => "cm.rating ASC",
            Some("-rating") => "cm.rating DESC",
            Some("-created_at") => "cm.created_at DESC",
            _ => "cm.created_at ASC",
        };
        let query = format!(
            "{LIST_SELECT}
             WHERE ($1::bigint IS NULL OR cm.user_id = $1)
               AND ($2::bigint IS NULL OR cm.course_id = $2)
               AND ($3::smallint IS NULL OR cm.rating = $3)
               AND ($4::boolean IS NULL OR cm.is_review = $4)
               AND ($5::text IS NULL OR cm.content ILIKE '%' || $5 || '%')
             ORDER BY {order}"
        );
        sqlx::query_as::<_, CommentListItem>(&query)
            .bind(filter.user)
            .bind(filter.course)
            .bind(filter.rating)
            .bind(filter.is_review)
            .bind(&filter.search)
            .fetch_all(pool)
            .await
    }

    /// List a course's comments, oldest first.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<CommentListItem>, sqlx::Error> {
        let query = format!("{LIST_SELECT} WHERE cm.course_id = $1 ORDER BY cm.created_at ASC");
        sqlx::query_as::<_, CommentListItem>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// List only flagged reviews that carry a rating.
    pub async fn list_reviews(pool: &PgPool) -> Result<Vec<CommentListItem>, sqlx::Error> {
        let query = format!(
            "{LIST_SELECT}
             WHERE cm.is_review AND cm.rating IS NOT NULL
             ORDER BY cm.created_at ASC"
        );
        sqlx::query_as::<_, CommentListItem>(&query).fetch_all(pool).await
    }

    /// Update a comment. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComment,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET
                content = COALESCE($2, content),
                rating = COALESCE($3, rating),
                is_review = COALESCE($4, is_review),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(&input.content)
            .bind(input.rating)
            .bind(input.is_review)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
