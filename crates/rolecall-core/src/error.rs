//! Core error type for record validation.

use thiserror::Error;

/// Errors produced while validating directory records and drafts.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required field was empty after trimming.
    #[error("field '{field}' must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Strict intake rejected a location no table entry recognizes.
    #[error("location {location:?} does not resolve to any known tag")]
    UnresolvableLocation {
        /// The free-text location as submitted.
        location: String,
    },
}
