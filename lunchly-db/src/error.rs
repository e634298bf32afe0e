//! Error types for lunchly-db

use lunchly_core::ValidationError;
use thiserror::Error;

/// Storage-layer error, tagged so callers can branch without inspecting
/// message text.
#[derive(Debug, Error)]
pub enum DbError {
    /// Underlying query failure, propagated unchanged
    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Lookup by id that matched no row
    #[error("no such {resource}: {id}")]
    NotFound { resource: &'static str, id: i64 },

    /// Field rule rejected an assignment
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DbError {
    /// True for the misses a web layer would translate to a 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_the_resource() {
        let err = DbError::NotFound {
            resource: "customer",
            id: 42,
        };
        assert_eq!(err.to_string(), "no such customer: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn validation_errors_pass_through() {
        let err = DbError::from(ValidationError::CustomerChange {
            current: 7,
            attempted: 9,
        });
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("cannot change customer ID"));
    }
}
