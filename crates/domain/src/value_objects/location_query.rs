//! Free-text location query value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A non-empty, trimmed place name typed by the user
///
/// Ambiguity is not resolved here: whichever candidate the geocoding
/// service ranks first wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Create a query from user input, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyQuery` if nothing is left after trimming.
    pub fn new(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The trimmed query text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key used to recognise the same place typed twice
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LocationQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<LocationQuery> for String {
    fn from(query: LocationQuery) -> Self {
        query.0
    }
}

impl AsRef<str> for LocationQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
