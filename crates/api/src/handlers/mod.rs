//! Request handlers, one module per resource.

pub mod categories;
pub mod comments;
pub mod courses;
pub mod enrollments;
pub mod lesson_progress;
pub mod lessons;
pub mod lookups;
pub mod profiles;
pub mod users;
