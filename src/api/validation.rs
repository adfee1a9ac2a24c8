use std::fmt;
use thiserror::Error;

/// Longest identifier accepted from a request path
pub const MAX_IDENTIFIER_LEN: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("content identifier is required")]
    Empty,
    #[error("content identifier exceeds 64 characters")]
    TooLong,
    #[error("content identifier contains invalid character '{0}'")]
    InvalidCharacter(char),
    #[error("content identifier must not start with '.'")]
    LeadingDot,
    #[error("content identifier is malformed: {0}")]
    Malformed(String),
}

/// A content identifier taken from a request path and checked to look like a
/// catalog key (e.g. `tt1234567`): ASCII alphanumerics plus `-`, `_` and `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentId(String);

impl ContentId {
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        if raw.is_empty() {
            return Err(IdentifierError::Empty);
        }

        if raw.len() > MAX_IDENTIFIER_LEN {
            return Err(IdentifierError::TooLong);
        }

        if let Some(c) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(IdentifierError::InvalidCharacter(c));
        }

        // rules out "." and ".." path tricks as well
        if raw.starts_with('.') {
            return Err(IdentifierError::LeadingDot);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
