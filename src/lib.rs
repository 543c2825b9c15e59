//! # passgen
//!
//! A password generator library with configurable character sets.
//!
//! ## Features
//!
//! - Character classes toggled per request (lowercase, uppercase, numeric, special)
//! - Custom letter pools replacing the built-in Latin alphabets
//! - Custom special-character pools
//! - Fluent mutator API for adjusting the default preset
//! - Composition-checked generation with a bounded retry budget
//!
//! ## Example
//!
//! ```
//! use passgen::{PasswordSettings, generate};
//!
//! let mut settings = PasswordSettings::default();
//! settings.add_lowercase().add_numeric();
//!
//! let password = generate(&settings).unwrap();
//! assert_eq!(password.len(), 16);
//! ```

pub mod settings;
pub mod generator;
pub mod error;

// Re-export main types
pub use error::{GeneratorError, Result};
pub use settings::{PasswordSettings, PasswordGeneratorSettings};
pub use generator::generate;

/// Built-in lowercase letter pool
pub const LOWERCASE_CHARACTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Built-in uppercase letter pool
pub const UPPERCASE_CHARACTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Built-in numeric pool
pub const NUMERIC_CHARACTERS: &str = "0123456789";

/// Default special-character pool
pub const DEFAULT_SPECIAL_CHARACTERS: &str = r"!#$%&*@\";

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 4;

/// Maximum password length
pub const PASSWORD_MAX_LENGTH: usize = 256;

/// Password length used by the default preset
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Retry budget used by the default preset
pub const DEFAULT_MAXIMUM_ATTEMPTS: usize = 10_000;
