//! Repositories for the `users` and `profiles` tables.

use learnhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{
    CreateUser, Profile, UpdateProfile, UpdateUser, User, UserDetail, UserFilter, UserListItem,
    ProfileFilter,
};

/// Column list shared across user queries to avoid repetition.
const USER_COLUMNS: &str =
    "id, username, email, password_hash, first_name, last_name, date_joined, \
     created_at, updated_at";

const PROFILE_COLUMNS: &str =
    "id, user_id, bio, birth_date, phone, avatar, is_instructor, created_at, updated_at";

/// Provides operations for user identities. A profile is created in the
/// same transaction as the user, which guarantees the one-profile-per-user
/// invariant.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user together with its profile. `password_hash` is
    /// produced by the API layer; this function never sees the plaintext.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUser,
        password_hash: &str,
    ) -> Result<UserDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO users (username, email, password_hash, first_name, last_name)
             VALUES ($1, $2, $3, COALESCE($4, ''), COALESCE($5, ''))
             RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(password_hash)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(&mut *tx)
            .await?;

        let profile_input = input.profile.as_ref();
        let query = format!(
            "INSERT INTO profiles (user_id, bio, birth_date, phone, avatar, is_instructor)
             VALUES ($1, COALESCE($2, ''), $3, COALESCE($4, ''), $5, COALESCE($6, FALSE))
             RETURNING {PROFILE_COLUMNS}"
        );
        let profile = sqlx::query_as::<_, Profile>(&query)
            .bind(user.id)
            .bind(profile_input.and_then(|p| p.bio.as_ref()))
            .bind(profile_input.and_then(|p| p.birth_date))
            .bind(profile_input.and_then(|p| p.phone.as_ref()))
            .bind(profile_input.and_then(|p| p.avatar.as_ref()))
            .bind(profile_input.and_then(|p| p.is_instructor))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(UserDetail {
            user,
            profile,
            total_courses: 0,
            total_enrollments: 0,
        })
    }

    /// Find a user by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Full detail projection: user, nested profile, derived counts.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<UserDetail>, sqlx::Error> {
        let Some(user) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let query = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1");
        let Some(profile) = sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let (total_courses, total_enrollments): (i64, i64) = sqlx::query_as(
            "SELECT
                (SELECT COUNT(*) FROM courses WHERE instructor_id = $1),
                (SELECT COUNT(*) FROM enrollments WHERE user_id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(Some(UserDetail {
            user,
            profile,
            total_courses,
            total_enrollments,
        }))
    }

    /// List users with the instructor flag projected from the profile.
    pub async fn list(pool: &PgPool, filter: &UserFilter) -> Result<Vec<UserListItem>, sqlx::Error> {
        let order = match filter.ordering.as_deref() {
            Some("username") => "u.username ASC",
            Some("-username") => "u.username DESC",
            Some("-date_joined") => "u.date_joined DESC",
            _ => "u.date_joined ASC",
        };
        let query = format!(
            "SELECT u.id, u.username, u.first_name, u.last_name,
                    COALESCE(p.is_instructor, FALSE) AS is_instructor
             FROM users u
             LEFT JOIN profiles p ON p.user_id = u.id
             WHERE ($1::text IS NULL
                    OR u.username ILIKE '%' || $1 || '%'
                    OR u.email ILIKE '%' || $1 || '%'
                    OR u.first_name ILIKE '%' || $1 || '%'
                    OR u.last_name ILIKE '%' || $1 || '%')
             ORDER BY {order}"
        );
        sqlx::query_as::<_, UserListItem>(&query)
            .bind(&filter.search)
            .fetch_all(pool)
            .await
    }

    /// Update a user. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                email = COALESCE($2, email),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user. Cascades to profile, courses, enrollments, and
    /// comments via foreign keys. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides operations for user profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find a profile by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the profile belonging to a user.
    pub async fn find_by_user(pool: &PgPool, user_id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List profiles, optionally filtered by instructor flag and a bio
    /// search.
    pub async fn list(pool: &PgPool, filter: &ProfileFilter) -> Result<Vec<Profile>, sqlx::Error> {
        let query = format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles
             WHERE ($1::boolean IS NULL OR is_instructor = $1)
               AND ($2::text IS NULL OR bio ILIKE '%' || $2 || '%')
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(filter.is_instructor)
            .bind(&filter.search)
            .fetch_all(pool)
            .await
    }

    /// Partially update a profile addressed by its own ID.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                bio = COALESCE($2, bio),
                birth_date = COALESCE($3, birth_date),
                phone = COALESCE($4, phone),
                avatar = COALESCE($5, avatar),
                is_instructor = COALESCE($6, is_instructor),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {PROFILE_COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(&input.bio)
            .bind(input.birth_date)
            .bind(&input.phone)
            .bind(&input.avatar)
            .bind(input.is_instructor)
            .fetch_optional(pool)
            .await
    }

    /// Partially update the profile belonging to a user.
    pub async fn update_by_user(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                bio = COALESCE($2, bio),
                birth_date = COALESCE($3, birth_date),
                phone = COALESCE($4, phone),
                avatar = COALESCE($5, avatar),
                is_instructor = COALESCE($6, is_instructor),
                updated_at = NOW()
             WHERE user_id = $1
             RETURNING {PROFILE_COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(&input.bio)
            .bind(input.birth_date)
            .bind(&input.phone)
            .bind(&input.avatar)
            .bind(input.is_instructor)
            .fetch_optional(pool)
            .await
    }

    /// Delete a profile by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
