//! Course category entity model and DTOs.

use learnhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a category. When `slug` is omitted it is derived
/// from `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating a category. The slug is stable once set and is not
/// updatable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub is_active: Option<bool>,
}

/// Category projection with the derived course count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryWithCount {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub total_courses: i64,
}

/// Query parameters for `GET /categories`.
#[derive(Debug, Deserialize)]
pub struct CategoryFilter {
    pub is_active: Option<bool>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
