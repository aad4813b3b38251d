//! Contact model representing one phonebook entry.

use crate::domain::{ContactId, PersonName, PhoneNumber};
use serde::{Deserialize, Serialize};

/// Raw contact input, exactly as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCandidate {
    /// Untrimmed display name
    #[serde(default)]
    pub name: String,

    /// Untrimmed phone number
    #[serde(default)]
    pub number: String,
}

impl ContactCandidate {
    /// Create a candidate from raw field values.
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }
}

/// A validated, trimmed (name, number) pair that has no id yet.
///
/// Only the validator produces these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedContact {
    name: PersonName,
    number: PhoneNumber,
}

impl NormalizedContact {
    pub(crate) fn new(name: PersonName, number: PhoneNumber) -> Self {
        Self { name, number }
    }

    /// The trimmed display name.
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// The trimmed phone number.
    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }
}

/// A stored phonebook entry.
///
/// Contacts are immutable once created: there are no setters, and the only
/// way to change an entry is to remove it and add a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: ContactId,
    name: PersonName,
    number: PhoneNumber,
}

impl Contact {
    /// Attach an id to a normalized candidate.
    pub fn from_normalized(id: ContactId, contact: NormalizedContact) -> Self {
        Self {
            id,
            name: contact.name,
            number: contact.number,
        }
    }

    /// Unique identifier within the store.
    pub fn id(&self) -> &ContactId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// Phone number as entered (trimmed).
    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }
}
