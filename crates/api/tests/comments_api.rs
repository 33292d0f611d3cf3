//! HTTP-level integration tests for comments and reviews, including the
//! review-requires-rating rule and course average ratings.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post_json};
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

async fn create_course(pool: &PgPool, title: &str) -> i64 {
    let instructor_id = create_user(pool, &format!("instructor-{title}")).await;

    let app = common::build_test_app(pool.clone());
    let category = body_json(
        post_json(
            app,
            "/api/v1/categories",
            serde_json::json!({"name": format!("category-{title}")}),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let course = body_json(
        post_json(
            app,
            "/api/v1/courses",
            serde_json::json!({
                "title": title,
                "instructor_id": instructor_id,
                "category_id": category["data"]["id"]
            }),
        )
        .await,
    )
    .await;
    course["data"]["id"].as_i64().unwrap()
}

async fn post_comment(pool: &PgPool, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/comments", body).await;
    let status = response.status();
    (status, body_json(response).await)
}

// ---------------------------------------------------------------------------
// Comment CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_comment_returns_201(pool: PgPool) {
    let user_id = create_user(&pool, "commenter").await;
    let course_id = create_course(&pool, "Commented Course").await;

    let (status, json) = post_comment(
        &pool,
        serde_json::json!({
            "user_id": user_id,
            "course_id": course_id,
            "content": "Great pacing!"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["content"], "Great pacing!");
    assert_eq!(json["data"]["is_review"], false);
    assert!(json["data"]["rating"].is_null());
    assert_eq!(json["data"]["user_username"], "commenter");
    assert_eq!(json["data"]["course_title"], "Commented Course");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_review_without_rating_returns_400(pool: PgPool) {
    let user_id = create_user(&pool, "hasty").await;
    let course_id = create_course(&pool, "Unrated Course").await;

    let (status, json) = post_comment(
        &pool,
        serde_json::json!({
            "user_id": user_id,
            "course_id": course_id,
            "content": "Five stars, trust me",
            "is_review": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rating_out_of_range_returns_400(pool: PgPool) {
    let user_id = create_user(&pool, "generous").await;
    let course_id = create_course(&pool, "Overrated Course").await;

    let (status, json) = post_comment(
        &pool,
        serde_json::json!({
            "user_id": user_id,
            "course_id": course_id,
            "content": "Eleven out of ten",
            "rating": 11,
            "is_review": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_for_unknown_course_returns_404(pool: PgPool) {
    let user_id = create_user(&pool, "lost").await;

    let (status, _) = post_comment(
        &pool,
        serde_json::json!({
            "user_id": user_id,
            "course_id": 999999,
            "content": "Where am I?"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_cannot_flag_unrated_comment_as_review(pool: PgPool) {
    let user_id = create_user(&pool, "flipper").await;
    let course_id = create_course(&pool, "Flagged Course").await;

    let (_, created) = post_comment(
        &pool,
        serde_json::json!({
            "user_id": user_id,
            "course_id": course_id,
            "content": "Just a comment"
        }),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Flipping is_review without supplying a rating must fail.
    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/comments/{id}"),
        serde_json::json!({"is_review": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Supplying the rating alongside the flag works.
    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/v1/comments/{id}"),
        serde_json::json!({"is_review": true, "rating": 4}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_review"], true);
    assert_eq!(json["data"]["rating"], 4);
}

// ---------------------------------------------------------------------------
// Reviews and average ratings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reviews_endpoint_lists_only_rated_reviews(pool: PgPool) {
    let user_id = create_user(&pool, "critic").await;
    let course_id = create_course(&pool, "Reviewed Course").await;

    post_comment(
        &pool,
        serde_json::json!({
            "user_id": user_id,
            "course_id": course_id,
            "content": "Plain comment"
        }),
    )
    .await;
    post_comment(
        &pool,
        serde_json::json!({
            "user_id": user_id,
            "course_id": course_id,
            "content": "Proper review",
            "rating": 5,
            "is_review": true
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/comments/reviews").await).await;
    let arr = json["data"].as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["content"], "Proper review");
    assert_eq!(arr[0]["rating"], 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_average_rating_counts_only_rated_reviews(pool: PgPool) {
    let course_id = create_course(&pool, "Rated Course").await;
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let carol = create_user(&pool, "carol").await;

    post_comment(
        &pool,
        serde_json::json!({
            "user_id": alice,
            "course_id": course_id,
            "content": "Loved it",
            "rating": 5,
            "is_review": true
        }),
    )
    .await;
    post_comment(
        &pool,
        serde_json::json!({
            "user_id": bob,
            "course_id": course_id,
            "content": "Solid",
            "rating": 4,
            "is_review": true
        }),
    )
    .await;
    // A rated non-review must not feed the average.
    post_comment(
        &pool,
        serde_json::json!({
            "user_id": carol,
            "course_id": course_id,
            "content": "Casual remark",
            "rating": 1
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/courses/rated-course").await).await;
    assert_eq!(json["data"]["average_rating"], 4.5);
}
