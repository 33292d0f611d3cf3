//! Repository for the `categories` table.
//!
//! Categories are addressed externally by slug. The slug is derived from
//! the name at creation time when absent and never recomputed afterwards.

use learnhub_core::slug::slugify;
use learnhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{
    Category, CategoryFilter, CategoryWithCount, CreateCategory, UpdateCategory,
};

const COLUMNS: &str = "id, name, slug, description, icon, is_active, created_at, updated_at";

/// Projection columns including the derived course count.
const COUNT_COLUMNS: &str = "id, name, slug, description, icon, is_active, created_at, \
    (SELECT COUNT(*) FROM courses WHERE courses.category_id = categories.id) AS total_courses";

/// Provides CRUD operations for course categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, deriving the slug from the name when the
    /// input does not supply one.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let slug = match &input.slug {
            Some(slug) => slug.clone(),
            None => slugify(&input.name),
        };
        let query = format!(
            "INSERT INTO categories (name, slug, description, icon, is_active)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), COALESCE($5, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&slug)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a category by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE slug = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Detail projection (with course count) by slug.
    pub async fn find_with_count(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<CategoryWithCount>, sqlx::Error> {
        let query = format!("SELECT {COUNT_COLUMNS} FROM categories WHERE slug = $1");
        sqlx::query_as::<_, CategoryWithCount>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List categories with derived course counts.
    pub async fn list(
        pool: &PgPool,
        filter: &CategoryFilter,
    ) -> Result<Vec<CategoryWithCount>, sqlx::Error> {
        let order = match filter.ordering.as_deref() {
            Some("created_at") => "created_at ASC",
            Some("-created_at") => "created_at DESC",
            Some("-name") => "name DESC",
            _ => "name ASC",
        };
        let query = format!(
            "SELECT {COUNT_COLUMNS} FROM categories
             WHERE ($1::boolean IS NULL OR is_active = $1)
               AND ($2::text IS NULL
                    OR name ILIKE '%' || $2 || '%'
                    OR description ILIKE '%' || $2 || '%')
             ORDER BY {order}"
        );
        sqlx::query_as::<_, CategoryWithCount>(&query)
            .bind(filter.is_active)
            .bind(&filter.search)
            .fetch_all(pool)
            .await
    }

    /// Update a category addressed by slug. The slug itself never changes.
    pub async fn update(
        pool: &PgPool,
        slug: &str,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                icon = COALESCE($4, icon),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
             WHERE slug = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(slug)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by slug. Cascades to its courses. Returns `true`
    /// if a row was removed.
    pub async fn delete(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE slug = $1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Resolve a category's internal ID from its slug.
    pub async fn id_by_slug(pool: &PgPool, slug: &str) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM categories WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|(id,)| id))
    }
}
