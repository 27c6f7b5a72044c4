//! Resource identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated, opaque identifier of a platform record.
///
/// The server is the sole issuer of identifiers; the client treats them
/// as opaque strings. Identifiers are the de-duplication key of the feed,
/// so equality and hashing must be exact.
///
/// # Example
///
/// ```
/// use pawhub_core::ResourceId;
///
/// let id = ResourceId::new("64f1c0ffee15").unwrap();
/// assert_eq!(id.as_str(), "64f1c0ffee15");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceId(String);

impl ResourceId {
    /// Create a new resource id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or contains whitespace or
    /// non-printable characters.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::ResourceId {
                value: s.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(InvalidInputError::ResourceId {
                value: s.to_string(),
                reason: "must not contain whitespace or control characters".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResourceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ResourceId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ResourceId> for String {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_object_id() {
        assert!(ResourceId::new("507f1f77bcf86cd799439011").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(ResourceId::new("").is_err());
    }

    #[test]
    fn rejects_whitespace() {
        assert!(ResourceId::new("abc def").is_err());
        assert!(ResourceId::new("abc\n").is_err());
    }

    #[test]
    fn serde_round_trips_as_string() {
        let id = ResourceId::new("abc123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc123\"");
        let back: ResourceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn serde_rejects_invalid() {
        assert!(serde_json::from_str::<ResourceId>("\"\"").is_err());
    }
}
