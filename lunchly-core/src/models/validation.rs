//! Validation error types

use thiserror::Error;

/// Validation error for domain records.
///
/// These are caller errors raised at the point of assignment; the silently
/// normalizing policies (guest count, notes, phone) never produce one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input that does not name a real point in time
    #[error("not a valid start time: '{value}'")]
    InvalidStartAt { value: String },

    /// Attempt to move a reservation to a different customer
    #[error("cannot change customer ID (currently {current}, attempted {attempted})")]
    CustomerChange { current: i64, attempted: i64 },
}
