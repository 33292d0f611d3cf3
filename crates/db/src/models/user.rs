//! User identity and profile entity models and DTOs.

use chrono::NaiveDate;
use learnhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub date_joined: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    pub bio: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: String,
    pub avatar: Option<String>,
    pub is_instructor: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. The profile is created in the same
/// transaction; omitted profile fields get their column defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile: Option<CreateProfile>,
}

/// Profile fields accepted at user creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfile {
    pub bio: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub is_instructor: Option<bool>,
}

/// DTO for updating a user. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// DTO for partially updating a profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfile {
    pub bio: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub is_instructor: Option<bool>,
}

/// Abbreviated projection for user listings. `is_instructor` is joined
/// from the profile for quick filtering.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserListItem {
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_instructor: bool,
}

/// Full detail projection: the user, its nested profile, and derived
/// counts.
#[derive(Debug, Clone, Serialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    pub profile: Profile,
    pub total_courses: i64,
    pub total_enrollments: i64,
}

/// Query parameters for `GET /users`.
#[derive(Debug, Deserialize)]
pub struct UserFilter {
    pub search: Option<String>,
    pub ordering: Option<String>,
}

/// Query parameters for `GET /profiles`.
#[derive(Debug, Deserialize)]
pub struct ProfileFilter {
    pub is_instructor: Option<bool>,
    pub search: Option<String>,
}
