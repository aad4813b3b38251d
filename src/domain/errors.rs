//! Domain validation errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// User-facing message for a name that breaks the name grammar.
pub const INVALID_NAME_MESSAGE: &str = "Name may contain only letters, apostrophe, dash and spaces. \
For example Adrian, Jacob Mercer, Charles de Batz de Castelmore d'Artagnan";

/// User-facing message for a number that breaks the phone grammar.
pub const INVALID_NUMBER_MESSAGE: &str =
    "Phone number must be digits and can contain spaces, dashes, parentheses and can start with +";

/// A user-editable field of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The contact's display name
    Name,

    /// The contact's phone number
    Number,
}

impl Field {
    /// The field name as rendered next to its input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field was empty once surrounding whitespace was removed.
    #[error("{0} is a required field")]
    RequiredFieldMissing(Field),

    /// The name contains digits or symbols outside the name grammar.
    #[error("{}", INVALID_NAME_MESSAGE)]
    InvalidName(String),

    /// The number does not follow the loose phone grammar.
    #[error("{}", INVALID_NUMBER_MESSAGE)]
    InvalidNumber(String),

    /// The provided ID is empty.
    #[error("ID cannot be empty")]
    EmptyId,
}

impl ValidationError {
    /// The field this error belongs to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::RequiredFieldMissing(field) => Some(*field),
            Self::InvalidName(_) => Some(Field::Name),
            Self::InvalidNumber(_) => Some(Field::Number),
            Self::EmptyId => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_message() {
        let err = ValidationError::RequiredFieldMissing(Field::Number);
        assert_eq!(err.to_string(), "number is a required field");
    }

    #[test]
    fn test_invalid_messages() {
        let err = ValidationError::InvalidName("Jo3".to_string());
        assert!(err.to_string().starts_with("Name may contain only letters"));

        let err = ValidationError::InvalidNumber("abc".to_string());
        assert!(err.to_string().starts_with("Phone number must be digits"));
    }

    #[test]
    fn test_error_field() {
        assert_eq!(
            ValidationError::InvalidName(String::new()).field(),
            Some(Field::Name)
        );
        assert_eq!(
            ValidationError::RequiredFieldMissing(Field::Number).field(),
            Some(Field::Number)
        );
        assert_eq!(ValidationError::EmptyId.field(), None);
    }

    #[test]
    fn test_field_ordering() {
        assert!(Field::Name < Field::Number);
        assert_eq!(serde_json::to_string(&Field::Number).unwrap(), "\"number\"");
    }
}
