pub mod categories;
pub mod comments;
pub mod courses;
pub mod enrollments;
pub mod health;
pub mod lesson_progress;
pub mod lessons;
pub mod lookups;
pub mod profiles;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                     list, create
/// /users/{id}                                get, update, delete
/// /users/{id}/profile                        nested profile (GET)
/// /users/{id}/update_profile                 partial profile update (PATCH)
/// /users/{id}/courses_taught                 courses taught (GET)
/// /users/{id}/enrollments                    enrollments (GET)
///
/// /profiles                                  list
/// /profiles/{id}                             get, update, delete
///
/// /categories                                list, create
/// /categories/{slug}                         get, update, delete
/// /categories/{slug}/courses                 courses in category (GET)
///
/// /difficulty-levels                         list        (read-only)
/// /difficulty-levels/{id}                    get
/// /course-statuses                           list, get
/// /lesson-types                              list, get
/// /enrollment-statuses                       list, get
///
/// /courses                                   list, create
/// /courses/published                         published only (GET)
/// /courses/{slug}                            get, update, delete
/// /courses/{slug}/lessons                    ordered lessons (GET)
/// /courses/{slug}/comments                   comments (GET)
/// /courses/{slug}/enrollments                enrollments (GET)
/// /courses/{slug}/stats                      aggregate stats (GET)
///
/// /lessons                                   list, create
/// /lessons/{id}                              get, update, delete
///
/// /lesson-progress                           list, create
/// /lesson-progress/{id}                      get, update, delete
/// /lesson-progress/{id}/complete             mark completed (POST)
///
/// /enrollments                               list, create
/// /enrollments/{id}                          get, update, delete
/// /enrollments/{id}/update_progress          set percentage (PATCH)
/// /enrollments/{id}/lesson_progress          progress rows (GET)
/// /enrollments/{id}/update_current_lesson    set pointer (PATCH)
/// /enrollments/{id}/cancel                   cancel (POST)
///
/// /comments                                  list, create
/// /comments/reviews                          rated reviews only (GET)
/// /comments/{id}                             get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Identity & profiles.
        .nest("/users", users::router())
        .nest("/profiles", profiles::router())
        // Catalog: categories and seeded lookups.
        .nest("/categories", categories::router())
        .nest("/difficulty-levels", lookups::difficulty_levels_router())
        .nest("/course-statuses", lookups::course_statuses_router())
        .nest("/lesson-types", lookups::lesson_types_router())
        .nest(
            "/enrollment-statuses",
            lookups::enrollment_statuses_router(),
        )
        // Courses and lessons.
        .nest("/courses", courses::router())
        .nest("/lessons", lessons::router())
        // Enrollment workflow and per-lesson progress.
        .nest("/enrollments", enrollments::router())
        .nest("/lesson-progress", lesson_progress::router())
        // Comments and reviews.
        .nest("/comments", comments::router())
}
