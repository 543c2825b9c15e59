//! Error types for passgen

use thiserror::Error;

/// Main error type for password generation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    /// Requested length is outside the allowed bounds
    #[error("Password length {length} is outside the allowed range {min}..={max}")]
    LengthOutOfBounds {
        /// Requested password length
        length: usize,
        /// Minimum allowed length
        min: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// No character class is enabled, so there is nothing to sample from
    #[error("Character set is empty")]
    EmptyCharacterSet,

    /// No candidate satisfied the composition constraints within the retry budget
    #[error("No valid password found after {0} attempts")]
    MaxAttemptsExceeded(usize),
}

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
