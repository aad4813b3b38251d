//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// A type-safe wrapper for contact IDs.
///
/// IDs are never empty. Freshly generated IDs come from [`ContactId::generate`]
/// or [`ContactId::numbered`]; the store decides which one to use.
///
/// # Example
///
/// ```
/// use phonebook_mcp_server::domain::ContactId;
///
/// let id = ContactId::new("id-1").unwrap();
/// assert_eq!(id.as_str(), "id-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    /// Create a ContactId from an existing value, rejecting empty strings.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if the provided ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Generate a random UUID v4 id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Build the deterministic id `id-<n>`.
    pub fn numbered(n: u64) -> Self {
        Self(format!("id-{}", n))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string, rejecting empty ids
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactId::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
