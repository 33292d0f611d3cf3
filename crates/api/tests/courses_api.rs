//! HTTP-level integration tests for the course catalog endpoints:
//! categories, courses, lessons, and the seeded lookup tables.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Fixtures, created through the API itself
// ---------------------------------------------------------------------------

async fn create_user(pool: &PgPool, username: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/api/v1/users",
            serde_json::json!({
                "username": username,
                "email": format!("{username}@example.com"),
                "password": "s3cure-passw0rd"
            }),
        )
        .await,
    )
    .await;
    json["data"]["id"].as_i64().unwrap()
}

async fn create_category(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/api/v1/categories",
            serde_json::json!({"name": name}),
        )
        .await,
    )
    .await;
    json["data"]["id"].as_i64().unwrap()
}

async fn create_course(pool: &PgPool, title: &str) -> serde_json::Value {
    let instructor_id = create_user(pool, &format!("instructor-{title}")).await;
    let category_id = create_category(pool, &format!("category-{title}")).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/courses",
        serde_json::json!({
            "title": title,
            "instructor_id": instructor_id,
            "category_id": category_id
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_category_derives_slug(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/categories",
        serde_json::json!({"name": "Data Science & ML"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "data-science-ml");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_update_keeps_slug(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/categories",
            serde_json::json!({"name": "Programming"}),
        )
        .await,
    )
    .await;
    assert_eq!(created["data"]["slug"], "programming");

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/v1/categories/programming",
        serde_json::json!({"name": "Coding"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Coding");
    // The slug is stable once set.
    assert_eq!(json["data"]["slug"], "programming");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_courses_for_unknown_slug_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/categories/no-such-slug/courses").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Seeded lookups (read-only)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lookup_endpoints_serve_seed_rows(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/difficulty-levels").await).await;
    let levels: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["level_name"].as_str().unwrap())
        .collect();
    assert_eq!(levels, vec!["Beginner", "Intermediate", "Advanced"]);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/enrollment-statuses").await).await;
    let statuses: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["status_name"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["Active", "Completed", "Cancelled"]);
}

// ---------------------------------------------------------------------------
// Course CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_course_returns_201_with_derived_slug(pool: PgPool) {
    let json = create_course(&pool, "Rust for Beginners").await;

    assert_eq!(json["data"]["slug"], "rust-for-beginners");
    assert_eq!(json["data"]["title"], "Rust for Beginners");
    assert!(json["data"]["instructor_name"].is_string());
    assert_eq!(json["data"]["total_lessons"], 0);
    assert!(json["data"]["average_rating"].is_null());
    assert_eq!(json["data"]["lessons"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_update_keeps_slug(pool: PgPool) {
    create_course(&pool, "Stable Slug").await;

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/v1/courses/stable-slug",
        serde_json::json!({"title": "Renamed Course", "price": 49.99}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Renamed Course");
    assert_eq!(json["data"]["slug"], "stable-slug");
    assert_eq!(json["data"]["price"], 49.99);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_course_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/courses/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_course_returns_204(pool: PgPool) {
    create_course(&pool, "Short Lived").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/v1/courses/short-lived").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/courses/short-lived").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Published listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_published_listing_excludes_unpublished(pool: PgPool) {
    create_course(&pool, "Unpublished Draft").await;

    let instructor_id = create_user(&pool, "publisher").await;
    let category_id = create_category(&pool, "Published Things").await;
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/courses",
        serde_json::json!({
            "title": "Live Course",
            "instructor_id": instructor_id,
            "category_id": category_id,
            "published_at": "2026-01-15T12:00:00Z"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/courses/published").await).await;
    let arr = json["data"].as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["slug"], "live-course");
}

// ---------------------------------------------------------------------------
// Nested lessons
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_lessons_are_ordered_by_index(pool: PgPool) {
    let created = create_course(&pool, "Ordered Course").await;
    let course_id = created["data"]["id"].as_i64().unwrap();

    // Created out of order on purpose.
    for (title, index) in [("Second", 2), ("First", 1), ("Third", 3)] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/lessons",
            serde_json::json!({
                "course_id": course_id,
                "title": title,
                "order_index": index
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/courses/ordered-course/lessons").await).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_lesson_for_missing_course_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/lessons",
        serde_json::json!({"course_id": 999999, "title": "Orphan"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_stats_shape(pool: PgPool) {
    let created = create_course(&pool, "Stats Course").await;
    let course_id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/lessons",
        serde_json::json!({"course_id": course_id, "title": "Only Lesson"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/courses/stats-course/stats").await).await;
    assert_eq!(json["data"]["total_lessons"], 1);
    assert_eq!(json["data"]["total_enrollments"], 0);
    assert_eq!(json["data"]["active_enrollments"], 0);
    assert_eq!(json["data"]["completed_enrollments"], 0);
    assert_eq!(json["data"]["total_reviews"], 0);
    assert!(json["data"]["average_rating"].is_null());
}
