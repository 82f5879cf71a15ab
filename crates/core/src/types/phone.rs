//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains a character outside digits, spaces, hyphens, and
    /// parentheses.
    #[error("phone number contains invalid character {0:?}")]
    InvalidCharacter(char),
    /// The input is shorter than the minimum length.
    #[error("phone number must be at least {min} characters")]
    TooShort {
        /// Minimum required length.
        min: usize,
    },
}

/// A phone number as entered on a checkout or adoption form.
///
/// Kept as entered rather than normalized; validation only requires at
/// least [`Phone::MIN_LENGTH`] characters drawn from digits, spaces,
/// hyphens, and parentheses.
///
/// ## Examples
///
/// ```
/// use nifty_pets_core::Phone;
///
/// assert!(Phone::parse("(555) 123-4567").is_ok());
/// assert!(Phone::parse("555-1234").is_err());     // too short
/// assert!(Phone::parse("call me maybe").is_err()); // letters
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum number of characters in a phone number.
    pub const MIN_LENGTH: usize = 10;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains characters other
    /// than digits, spaces, hyphens, and parentheses, or is shorter than
    /// [`Phone::MIN_LENGTH`] characters.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')')))
        {
            return Err(PhoneError::InvalidCharacter(c));
        }

        if s.chars().count() < Self::MIN_LENGTH {
            return Err(PhoneError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
