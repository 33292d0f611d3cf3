//! Domain-level error type shared across crates.

/// Errors produced by domain and repository logic, independent of HTTP.
///
/// The API layer maps these onto status codes; see `learnhub-api`'s
/// `AppError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A record could not be found. `key` is the external identifier used
    /// in the lookup (a numeric id or a slug, depending on the resource).
    #[error("{entity} '{key}' not found")]
    NotFound {
        entity: &'static str,
        key: String,
    },

    /// Input failed a business-rule or range check.
    #[error("{0}")]
    Validation(String),

    /// The operation conflicts with existing state.
    #[error("{0}")]
    Conflict(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found error for a numeric-id lookup.
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound {
            entity,
            key: id.to_string(),
        }
    }

    /// Not-found error for a slug or name lookup.
    pub fn not_found_key(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }
}
