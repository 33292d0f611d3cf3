//! Per-table repositories. Each repo is a unit struct with async
//! functions taking `&PgPool`; multi-step mutations open their own
//! transaction so callers always observe a single consistent state.

mod category_repo;
mod comment_repo;
mod course_repo;
mod enrollment_repo;
mod lesson_progress_repo;
mod lesson_repo;
mod lookup_repo;
mod user_repo;

pub use category_repo::CategoryRepo;
pub use comment_repo::CommentRepo;
pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use lesson_progress_repo::LessonProgressRepo;
pub use lesson_repo::LessonRepo;
pub use lookup_repo::{
    CourseStatusRepo, DifficultyLevelRepo, EnrollmentStatusRepo, LessonTypeRepo,
};
pub use user_repo::{ProfileRepo, UserRepo};
