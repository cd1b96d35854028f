//! Error types for todo domain validation.

use thiserror::Error;

/// Errors returned while constructing todo domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The todo text is empty after trimming.
    #[error("todo text must not be empty")]
    EmptyText,

    /// The todo text exceeds the storage limit.
    #[error("todo text is {length} characters long, the limit is {max}")]
    TextTooLong {
        /// Character count of the trimmed text.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },
}
