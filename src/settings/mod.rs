//! Password generation settings
//!
//! Holds the character-set composition and the constraints the generator
//! must honor. Ported from the original C# `PasswordSettings` class,
//! preserving its behavior.

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_MAXIMUM_ATTEMPTS, DEFAULT_PASSWORD_LENGTH, DEFAULT_SPECIAL_CHARACTERS,
    LOWERCASE_CHARACTERS, NUMERIC_CHARACTERS, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH,
    UPPERCASE_CHARACTERS,
};


/// Alias kept for parity with the original API, which had a subclass
/// solely to pin the constructor signature. No added behavior.
pub type PasswordGeneratorSettings = PasswordSettings;

/// Configuration for a single password-generation request.
///
/// The settings object accumulates which character classes are enabled and
/// derives `character_set`, the full alphabet the generator samples from.
/// It performs no validation: degenerate configurations (empty alphabet,
/// length outside bounds) are accepted silently and reported by
/// [`generate`](crate::generate) instead.
///
/// A freshly constructed instance with `using_defaults = true` is in the
/// "default preset" state: the first `add_*` call clears the whole
/// composition before applying its own addition, so explicit customization
/// never mixes with the preset. Subsequent `add_*` calls are purely
/// additive.
///
/// # Example
///
/// ```
/// use passgen::PasswordSettings;
///
/// let mut settings = PasswordSettings::default();
/// settings.add_lowercase().add_special_characters("-_");
///
/// assert_eq!(settings.character_set(), "abcdefghijklmnopqrstuvwxyz-_");
/// assert_eq!(settings.special_characters(), "-_");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordSettings {
    include_lowercase: bool,
    include_uppercase: bool,
    include_numeric: bool,
    include_special: bool,
    password_length: usize,
    character_set: String,
    special_characters: String,
    maximum_attempts: usize,
    minimum_length: usize,
    maximum_length: usize,
    using_defaults: bool,
}

impl PasswordSettings {
    /// Create settings with an explicit initial composition.
    ///
    /// `character_set` becomes the concatenation of the enabled pools in
    /// fixed order: lowercase, uppercase, numeric, special. When
    /// `custom_letters` is given, its lowercased and uppercased variants
    /// replace the built-in Latin alphabets for the lowercase and
    /// uppercase classes; the numeric and special classes always use the
    /// built-in pools here.
    ///
    /// Length bounds are fixed to 4 and 256 regardless of input, and
    /// `password_length` is not checked against them.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        include_lowercase: bool,
        include_uppercase: bool,
        include_numeric: bool,
        include_special: bool,
        password_length: usize,
        maximum_attempts: usize,
        using_defaults: bool,
        custom_letters: Option<&str>,
    ) -> Self {
        let character_set = build_character_set(
            include_lowercase,
            include_uppercase,
            include_numeric,
            include_special,
            custom_letters,
        );

        PasswordSettings {
            include_lowercase,
            include_uppercase,
            include_numeric,
            include_special,
            password_length,
            character_set,
            special_characters: DEFAULT_SPECIAL_CHARACTERS.to_string(),
            maximum_attempts,
            minimum_length: PASSWORD_MIN_LENGTH,
            maximum_length: PASSWORD_MAX_LENGTH,
            using_defaults,
        }
    }

    /// Enable the lowercase class and append its pool to the alphabet.
    ///
    /// Like every `add_*` mutator, calling this twice appends the pool
    /// twice, biasing sampling toward the class. The original behaves the
    /// same way and callers rely on it for weighting.
    pub fn add_lowercase(&mut self) -> &mut Self {
        self.stop_using_defaults();
        self.include_lowercase = true;
        self.character_set.push_str(LOWERCASE_CHARACTERS);
        self
    }

    /// Enable the uppercase class and append its pool to the alphabet.
    pub fn add_uppercase(&mut self) -> &mut Self {
        self.stop_using_defaults();
        self.include_uppercase = true;
        self.character_set.push_str(UPPERCASE_CHARACTERS);
        self
    }

    /// Enable the numeric class and append its pool to the alphabet.
    pub fn add_numeric(&mut self) -> &mut Self {
        self.stop_using_defaults();
        self.include_numeric = true;
        self.character_set.push_str(NUMERIC_CHARACTERS);
        self
    }

    /// Enable the special class with the default special pool.
    ///
    /// Resets `special_characters` back to the default pool before
    /// appending it, discarding any earlier override.
    pub fn add_special(&mut self) -> &mut Self {
        self.stop_using_defaults();
        self.include_special = true;
        self.special_characters = DEFAULT_SPECIAL_CHARACTERS.to_string();
        self.character_set.push_str(DEFAULT_SPECIAL_CHARACTERS);
        self
    }

    /// Enable the special class with a caller-supplied pool.
    ///
    /// The pool is stored as `special_characters` and appended to the
    /// alphabet as-is.
    pub fn add_special_characters(&mut self, special_characters: &str) -> &mut Self {
        self.stop_using_defaults();
        self.include_special = true;
        self.special_characters = special_characters.to_string();
        self.character_set.push_str(special_characters);
        self
    }

    /// Set the target password length. Not validated against the bounds;
    /// [`generate`](crate::generate) rejects out-of-range lengths.
    pub fn set_password_length(&mut self, password_length: usize) -> &mut Self {
        self.password_length = password_length;
        self
    }

    /// The full alphabet the generator samples from.
    pub fn character_set(&self) -> &str {
        &self.character_set
    }

    /// The current special-character pool.
    pub fn special_characters(&self) -> &str {
        &self.special_characters
    }

    /// Target password length.
    pub fn password_length(&self) -> usize {
        self.password_length
    }

    /// Retry budget for the generation loop.
    pub fn maximum_attempts(&self) -> usize {
        self.maximum_attempts
    }

    /// Lower length bound (always 4).
    pub fn minimum_length(&self) -> usize {
        self.minimum_length
    }

    /// Upper length bound (always 256).
    pub fn maximum_length(&self) -> usize {
        self.maximum_length
    }

    /// Whether the lowercase class is enabled.
    pub fn include_lowercase(&self) -> bool {
        self.include_lowercase
    }

    /// Whether the uppercase class is enabled.
    pub fn include_uppercase(&self) -> bool {
        self.include_uppercase
    }

    /// Whether the numeric class is enabled.
    pub fn include_numeric(&self) -> bool {
        self.include_numeric
    }

    /// Whether the special class is enabled.
    pub fn include_special(&self) -> bool {
        self.include_special
    }

    // First mutator call on a default preset clears the composition so
    // defaults and explicit customization never mix. Later calls see
    // using_defaults == false and leave the accumulated state alone.
    fn stop_using_defaults(&mut self) {
        if !self.using_defaults {
            return;
        }
        self.character_set.clear();
        self.include_lowercase = false;
        self.include_uppercase = false;
        self.include_numeric = false;
        self.include_special = false;
        self.using_defaults = false;
    }
}

impl Default for PasswordSettings {
    /// The default preset: all four classes enabled, length 16,
    /// 10 000 attempts, `using_defaults` set so the first `add_*` call
    /// replaces the preset instead of extending it.
    fn default() -> Self {
        PasswordSettings::new(
            true,
            true,
            true,
            true,
            DEFAULT_PASSWORD_LENGTH,
            DEFAULT_MAXIMUM_ATTEMPTS,
            true,
            None,
        )
    }
}

fn build_character_set(
    include_lowercase: bool,
    include_uppercase: bool,
    include_numeric: bool,
    include_special: bool,
    custom_letters: Option<&str>,
) -> String {
    let mut character_set = String::new();

    match custom_letters {
        Some(letters) => {
            if include_lowercase {
                character_set.push_str(&letters.to_lowercase());
            }
            if include_uppercase {
                character_set.push_str(&letters.to_uppercase());
            }
        }
        None => {
            if include_lowercase {
                character_set.push_str(LOWERCASE_CHARACTERS);
            }
            if include_uppercase {
                character_set.push_str(UPPERCASE_CHARACTERS);
            }
        }
    }

    if include_numeric {
        character_set.push_str(NUMERIC_CHARACTERS);
    }

    if include_special {
        character_set.push_str(DEFAULT_SPECIAL_CHARACTERS);
    }

    character_set
}
