//! Shared domain types and helpers for the LearnHub backend.
//!
//! This crate is free of I/O: it holds the common ID/timestamp aliases,
//! the domain error type, slug derivation, and the progress/rating math
//! used by the repository and API layers.

pub mod error;
pub mod progress;
pub mod slug;
pub mod types;
