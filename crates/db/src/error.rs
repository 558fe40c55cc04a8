//! Storage error type shared by both store implementations.

/// Error returned by [`crate::store::LaundryStore`] operations.
///
/// "Row not found" outcomes are modelled as `Ok(None)` / `Ok(false)` on
/// the individual methods rather than as an error variant; `Conflict`
/// covers uniqueness violations raised by the fixture store (the live
/// store surfaces those through the wrapped sqlx error instead).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Conflict: {0}")]
    Conflict(String),
}
