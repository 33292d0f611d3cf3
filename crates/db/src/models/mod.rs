//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - Projection structs for list and detail responses, with names and
//!   counts resolved from foreign keys in SQL

pub mod category;
pub mod comment;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod lesson_progress;
pub mod lookup;
pub mod user;
