use std::{fmt, str::FromStr};

use pwhash::bcrypt;
use thiserror::Error;

const MIN_LEN: usize = 6;

/// A bcrypt hashed password.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("The password is too short")]
    TooShort,
    #[error(transparent)]
    Hash(#[from] pwhash::error::Error),
}

impl Password {
    pub const fn min_len() -> usize {
        MIN_LEN
    }

    /// Wraps an already hashed password, e.g. loaded from the database.
    pub const fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn verify(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.0)
    }
}

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() < MIN_LEN {
            return Err(ParseError::TooShort);
        }
        Ok(Self(bcrypt::hash(s)?))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
