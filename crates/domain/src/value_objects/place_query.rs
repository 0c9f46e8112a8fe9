//! Place query value object
//!
//! Free text typed by the user to name a start or destination. The only
//! requirement is that something was typed.
//!
//! # Examples
//!
//! ```
//! use domain::PlaceQuery;
//!
//! let query = PlaceQuery::new("  New Delhi ").unwrap();
//! assert_eq!(query.as_str(), "New Delhi");
//!
//! assert!(PlaceQuery::new("").is_err());
//! assert!(PlaceQuery::new("   ").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A non-empty, trimmed place name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(try_from = "String", into = "String")]
pub struct PlaceQuery {
    #[validate(length(min = 1))]
    value: String,
}

impl PlaceQuery {
    /// Create a new query from user input
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the text is empty after trimming.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let value = text.into().trim().to_string();

        let candidate = Self { value };
        candidate
            .validate()
            .map_err(|_| DomainError::InvalidInput("place name must not be empty".to_string()))?;

        Ok(candidate)
    }

    /// Get the query text
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl fmt::Display for PlaceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for PlaceQuery {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for PlaceQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlaceQuery> for String {
    fn from(query: PlaceQuery) -> Self {
        query.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_name() {
        let query = PlaceQuery::new("Mumbai").unwrap();
        assert_eq!(query.as_str(), "Mumbai");
        assert_eq!(query.to_string(), "Mumbai");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let query = PlaceQuery::new("\tConnaught Place, Delhi \n").unwrap();
        assert_eq!(query.as_str(), "Connaught Place, Delhi");
    }

    #[test]
    fn rejects_empty() {
        let err = PlaceQuery::new("").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn rejects_whitespace_only() {
        assert!(PlaceQuery::new("   ").is_err());
    }

    #[test]
    fn keeps_unicode() {
        let query = PlaceQuery::new("मुंबई").unwrap();
        assert_eq!(query.as_str(), "मुंबई");
    }

    #[test]
    fn deserialization_validates() {
        let ok: PlaceQuery = serde_json::from_str(r#""Pune""#).unwrap();
        assert_eq!(ok.as_str(), "Pune");

        let err: Result<PlaceQuery, _> = serde_json::from_str(r#""  ""#);
        assert!(err.is_err());
    }
}
