//! Field-keyed validation failures.

use crate::domain::{Field, ValidationError};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// The set of violations produced by one validation pass.
///
/// Holds at most one error per field, iterated in field order
/// (name, then number). Serializes as `{"name": "...", "number": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl FieldErrors {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the violation for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.errors.insert(field, error);
    }

    /// The violation recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Whether `field` failed validation.
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over `(field, error)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// Field name to user-facing message, ready for rendering.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|(field, error)| (field.as_str(), error.to_string()))
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, error)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.messages().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_ordered_by_field() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Number, ValidationError::InvalidNumber("x".to_string()));
        errors.insert(Field::Name, ValidationError::RequiredFieldMissing(Field::Name));

        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Number]);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_field_errors_display() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Name, ValidationError::RequiredFieldMissing(Field::Name));
        errors.insert(Field::Number, ValidationError::RequiredFieldMissing(Field::Number));

        assert_eq!(
            errors.to_string(),
            "name: name is a required field; number: number is a required field"
        );
    }

    #[test]
    fn test_field_errors_serialize_as_messages() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Number, ValidationError::RequiredFieldMissing(Field::Number));

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "number": "number is a required field" })
        );
        assert!(!errors.contains(Field::Name));
    }
}
