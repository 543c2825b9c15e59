//! Password generation
//!
//! Thin sampling loop over a finished [`PasswordSettings`]: draw
//! characters uniformly from the alphabet, retry until the candidate
//! contains every enabled character class or the retry budget runs out.

use rand::Rng;

use crate::error::{GeneratorError, Result};
use crate::settings::PasswordSettings;

/// Generate a random password honoring the given settings.
///
/// Samples `password_length` characters uniformly from the settings'
/// character set, retrying up to `maximum_attempts` times until the
/// candidate contains at least one character of every enabled class.
///
/// This is where the permissive builder gets checked: a length outside
/// the settings' bounds or an empty alphabet is rejected with a typed
/// error instead of looping forever.
///
/// # Example
///
/// ```
/// use passgen::{PasswordSettings, generate};
///
/// let settings = PasswordSettings::new(true, true, true, false, 12, 10_000, true, None);
/// let password = generate(&settings).unwrap();
///
/// assert_eq!(password.chars().count(), 12);
/// assert!(password.chars().any(|c| c.is_ascii_digit()));
/// ```
pub fn generate(settings: &PasswordSettings) -> Result<String> {
    let length = settings.password_length();
    if length < settings.minimum_length() || length > settings.maximum_length() {
        return Err(GeneratorError::LengthOutOfBounds {
            length,
            min: settings.minimum_length(),
            max: settings.maximum_length(),
        });
    }

    let chars: Vec<char> = settings.character_set().chars().collect();
    if chars.is_empty() {
        return Err(GeneratorError::EmptyCharacterSet);
    }

    let mut rng = rand::rng();
    for _ in 0..settings.maximum_attempts() {
        let candidate: String = (0..length)
            .map(|_| chars[rng.random_range(0..chars.len())])
            .collect();

        if meets_composition(&candidate, settings) {
            return Ok(candidate);
        }
    }

    Err(GeneratorError::MaxAttemptsExceeded(
        settings.maximum_attempts(),
    ))
}

/// Check that the candidate contains at least one character of every
/// enabled class. Classes that are not enabled are not checked, so stray
/// characters from a custom pool never disqualify a candidate.
fn meets_composition(candidate: &str, settings: &PasswordSettings) -> bool {
    if settings.include_lowercase() && !candidate.chars().any(|c| c.is_lowercase()) {
        return false;
    }
    if settings.include_uppercase() && !candidate.chars().any(|c| c.is_uppercase()) {
        return false;
    }
    if settings.include_numeric() && !candidate.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    if settings.include_special()
        && !candidate
            .chars()
            .any(|c| settings.special_characters().contains(c))
    {
        return false;
    }
    true
}
