//! C identifier representation
//!
//! Array symbols and include guards end up verbatim in generated C, so they
//! are validated once at the edge and carried as a `CIdent` afterwards.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// A validated C identifier
///
/// Matches `[A-Za-z_][A-Za-z0-9_]*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct CIdent(String);

/// Error type for invalid identifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentError {
    #[error("identifier must not be empty")]
    Empty,
    #[error("identifier '{0}' must not start with a digit")]
    LeadingDigit(String),
    #[error("identifier '{ident}' contains invalid character '{ch}'")]
    InvalidCharacter { ident: String, ch: char },
}

impl CIdent {
    /// Create a new identifier from a string
    ///
    /// # Errors
    /// Returns `IdentError` if the text is empty, starts with a digit, or
    /// contains anything other than ASCII letters, digits and underscores.
    ///
    /// # Examples
    /// ```
    /// use faker_extract::core::CIdent;
    ///
    /// let ident = CIdent::new("faker_words").unwrap();
    /// assert_eq!(ident.as_str(), "faker_words");
    ///
    /// assert!(CIdent::new("2fast").is_err());
    /// assert!(CIdent::new("with-dash").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, IdentError> {
        let text: String = text.into();

        let Some(first) = text.chars().next() else {
            return Err(IdentError::Empty);
        };

        if first.is_ascii_digit() {
            return Err(IdentError::LeadingDigit(text));
        }

        if let Some(ch) = text
            .chars()
            .find(|&c| !(c.is_ascii_alphanumeric() || c == '_'))
        {
            return Err(IdentError::InvalidCharacter { ident: text, ch });
        }

        Ok(Self(text))
    }

    /// Get the identifier as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the companion length constant (`<ident>_count`)
    #[must_use]
    pub fn count_symbol(&self) -> String {
        format!("{}_count", self.0)
    }
}

impl TryFrom<String> for CIdent {
    type Error = IdentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for CIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
