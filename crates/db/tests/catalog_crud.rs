//! Integration tests for the catalog repositories (users, categories,
//! courses, lessons, comments) against a real database.
//!
//! - Slug derivation and stability for categories and courses
//! - Detail projections with resolved names and derived numbers
//! - Cascade delete behaviour
//! - Unique constraint violations

use learnhub_core::types::DbId;
use sqlx::PgPool;

use learnhub_db::models::category::{CategoryFilter, CreateCategory, UpdateCategory};
use learnhub_db::models::comment::CreateComment;
use learnhub_db::models::course::{CourseFilter, CreateCourse, UpdateCourse};
use learnhub_db::models::lesson::CreateLesson;
use learnhub_db::models::user::{CreateProfile, CreateUser};
use learnhub_db::repositories::{
    CategoryRepo, CommentRepo, CourseRepo, LessonRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "irrelevant-here".to_string(),
        first_name: None,
        last_name: None,
        profile: None,
    }
}

fn new_category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        slug: None,
        description: None,
        icon: None,
        is_active: None,
    }
}

fn new_course(title: &str, instructor_id: DbId, category_id: DbId) -> CreateCourse {
    CreateCourse {
        title: title.to_string(),
        slug: None,
        description: None,
        instructor_id,
        category_id,
        difficulty_level_id: None,
        status_id: None,
        thumbnail: None,
        price: None,
        duration_hours: None,
        language: None,
        requirements: None,
        learning_objectives: None,
        published_at: None,
    }
}

fn new_lesson(course_id: DbId, title: &str, order_index: i32) -> CreateLesson {
    CreateLesson {
        course_id,
        title: title.to_string(),
        description: None,
        lesson_type_id: None,
        content: None,
        video_url: None,
        duration_minutes: None,
        order_index: Some(order_index),
        is_published: None,
        is_free: None,
        attachments: None,
    }
}

async fn seed_course(pool: &PgPool, username: &str, title: &str) -> (DbId, String) {
    let instructor = UserRepo::create(pool, &new_user(username), "x")
        .await
        .unwrap();
    let category = CategoryRepo::create(pool, &new_category(&format!("cat-{username}")))
        .await
        .unwrap();
    let course = CourseRepo::create(pool, &new_course(title, instructor.user.id, category.id))
        .await
        .unwrap();
    (course.id, course.slug)
}

// ---------------------------------------------------------------------------
// Users & profiles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_user_with_profile_in_one_transaction(pool: PgPool) {
    let mut input = new_user("ada");
    input.first_name = Some("Ada".to_string());
    input.profile = Some(CreateProfile {
        bio: Some("Teaches analytical engines".to_string()),
        birth_date: None,
        phone: None,
        avatar: None,
        is_instructor: Some(true),
    });

    let detail = UserRepo::create(&pool, &input, "phc-hash").await.unwrap();

    assert_eq!(detail.user.username, "ada");
    assert_eq!(detail.user.first_name, "Ada");
    assert!(detail.profile.is_instructor);
    assert_eq!(detail.profile.bio, "Teaches analytical engines");
    assert_eq!(detail.total_courses, 0);
    assert_eq!(detail.total_enrollments, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_hits_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("grace"), "x").await.unwrap();

    let mut second = new_user("grace");
    second.email = "other@example.com".to_string();
    let err = UserRepo::create(&pool, &second, "x").await.unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_users_username"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_detail_counts_courses_and_enrollments(pool: PgPool) {
    let instructor = UserRepo::create(&pool, &new_user("knuth"), "x").await.unwrap();
    let category = CategoryRepo::create(&pool, &new_category("Algorithms")).await.unwrap();
    CourseRepo::create(&pool, &new_course("TAOCP", instructor.user.id, category.id))
        .await
        .unwrap();

    let detail = UserRepo::find_detail(&pool, instructor.user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.total_courses, 1);
    assert_eq!(detail.total_enrollments, 0);
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_slug_is_derived_from_name(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("Data Science & ML"))
        .await
        .unwrap();
    assert_eq!(category.slug, "data-science-ml");

    let found = CategoryRepo::find_by_slug(&pool, "data-science-ml")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, category.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_update_never_touches_slug(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("Web Development"))
        .await
        .unwrap();

    let updated = CategoryRepo::update(
        &pool,
        &category.slug,
        &UpdateCategory {
            name: Some("Fullstack Development".to_string()),
            description: None,
            icon: None,
            is_active: Some(false),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "Fullstack Development");
    assert_eq!(updated.slug, "web-development");
    assert!(!updated.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_list_filters_and_counts(pool: PgPool) {
    let active = CategoryRepo::create(&pool, &new_category("Active One")).await.unwrap();
    let mut inactive = new_category("Inactive One");
    inactive.is_active = Some(false);
    CategoryRepo::create(&pool, &inactive).await.unwrap();

    let filter = CategoryFilter {
        is_active: Some(true),
        search: None,
        ordering: None,
    };
    let listed = CategoryRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].slug, active.slug);
    assert_eq!(listed[0].total_courses, 0);
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn course_slug_derived_and_stable_across_updates(pool: PgPool) {
    let (_, slug) = seed_course(&pool, "turing", "Intro to Computability").await;
    assert_eq!(slug, "intro-to-computability");

    let updated = CourseRepo::update(
        &pool,
        &slug,
        &UpdateCourse {
            title: Some("Computability, Revisited".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.title, "Computability, Revisited");
    assert_eq!(updated.slug, "intro-to-computability");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_course_slug_hits_unique_constraint(pool: PgPool) {
    let (_, _) = seed_course(&pool, "hopper", "Compilers").await;

    let instructor = UserRepo::create(&pool, &new_user("hopper2"), "x").await.unwrap();
    let category = CategoryRepo::create(&pool, &new_category("Other")).await.unwrap();
    let err = CourseRepo::create(
        &pool,
        &new_course("Compilers", instructor.user.id, category.id),
    )
    .await
    .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_courses_slug"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn course_detail_orders_lessons_by_index(pool: PgPool) {
    let (course_id, slug) = seed_course(&pool, "ritchie", "Systems Programming").await;
    LessonRepo::create(&pool, &new_lesson(course_id, "Pointers", 2)).await.unwrap();
    LessonRepo::create(&pool, &new_lesson(course_id, "Hello World", 1)).await.unwrap();
    LessonRepo::create(&pool, &new_lesson(course_id, "Processes", 3)).await.unwrap();

    let detail = CourseRepo::find_detail(&pool, &slug).await.unwrap().unwrap();
    assert_eq!(detail.course.total_lessons, 3);
    let titles: Vec<&str> = detail.lessons.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, ["Hello World", "Pointers", "Processes"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn course_average_rating_counts_only_rated_reviews(pool: PgPool) {
    let (course_id, _) = seed_course(&pool, "reviewer-magnet", "Popular Course").await;
    let alice = UserRepo::create(&pool, &new_user("alice"), "x").await.unwrap();
    let bob = UserRepo::create(&pool, &new_user("bob"), "x").await.unwrap();

    // Two rated reviews: (5 + 4) / 2 = 4.5.
    for (user, rating) in [(&alice, 5_i16), (&bob, 4_i16)] {
        CommentRepo::create(
            &pool,
            &CreateComment {
                user_id: user.user.id,
                course_id,
                content: "review".to_string(),
                rating: Some(rating),
                is_review: Some(true),
            },
        )
        .await
        .unwrap();
    }
    // A plain comment with a rating does not count toward the average.
    CommentRepo::create(
        &pool,
        &CreateComment {
            user_id: alice.user.id,
            course_id,
            content: "just a comment".to_string(),
            rating: Some(1),
            is_review: Some(false),
        },
    )
    .await
    .unwrap();

    let item = CourseRepo::list_item_by_id(&pool, course_id).await.unwrap().unwrap();
    assert_eq!(item.average_rating, Some(4.5));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn course_without_reviews_has_null_average(pool: PgPool) {
    let (course_id, _) = seed_course(&pool, "lonely", "Unreviewed Course").await;
    let item = CourseRepo::list_item_by_id(&pool, course_id).await.unwrap().unwrap();
    assert_eq!(item.average_rating, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn course_list_filters_by_language(pool: PgPool) {
    let instructor = UserRepo::create(&pool, &new_user("polyglot"), "x").await.unwrap();
    let category = CategoryRepo::create(&pool, &new_category("Languages")).await.unwrap();

    let mut fr = new_course("Cours de Rust", instructor.user.id, category.id);
    fr.language = Some("fr".to_string());
    CourseRepo::create(&pool, &fr).await.unwrap();
    CourseRepo::create(&pool, &new_course("Rust Course", instructor.user.id, category.id))
        .await
        .unwrap();

    let filter = CourseFilter {
        language: Some("fr".to_string()),
        ..Default::default()
    };
    let listed = CourseRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Cours de Rust");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_course_cascades_to_lessons(pool: PgPool) {
    let (course_id, slug) = seed_course(&pool, "cascade", "Doomed Course").await;
    let lesson = LessonRepo::create(&pool, &new_lesson(course_id, "Gone Soon", 1))
        .await
        .unwrap();

    assert!(CourseRepo::delete(&pool, &slug).await.unwrap());
    assert!(LessonRepo::find_by_id(&pool, lesson.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Course stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn course_stats_aggregates_lessons_and_reviews(pool: PgPool) {
    let (course_id, slug) = seed_course(&pool, "statistician", "Stats Course").await;
    LessonRepo::create(&pool, &new_lesson(course_id, "One", 1)).await.unwrap();
    LessonRepo::create(&pool, &new_lesson(course_id, "Two", 2)).await.unwrap();

    let student = UserRepo::create(&pool, &new_user("student1"), "x").await.unwrap();
    CommentRepo::create(
        &pool,
        &CreateComment {
            user_id: student.user.id,
            course_id,
            content: "great".to_string(),
            rating: Some(5),
            is_review: Some(true),
        },
    )
    .await
    .unwrap();

    let stats = CourseRepo::stats(&pool, &slug).await.unwrap().unwrap();
    assert_eq!(stats.total_lessons, 2);
    assert_eq!(stats.total_reviews, 1);
    assert_eq!(stats.average_rating, Some(5.0));
    assert_eq!(stats.total_enrollments, 0);
}
