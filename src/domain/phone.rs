//! PhoneNumber value object.

use super::errors::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Loose international phone grammar: optional `+`, optional country code,
/// optional (possibly parenthesized) area code, then three digit groups.
/// Separators are a single space, dash or dot between groups.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\+?(?:[0-9]{1,4})?[-.\s]?\(?(?:[0-9]{1,3})?\)?[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,9}$",
    )
    .expect("Failed to compile phone number regex")
});

/// A type-safe wrapper for phone numbers.
///
/// The grammar is permissive on purpose: it accepts the formats people
/// usually type and rejects obviously non-numeric input. It is not E.164
/// validation, so some accepted strings are not dialable.
///
/// # Example
///
/// ```
/// use phonebook_mcp_server::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new(" +1 555-1234 ").unwrap();
/// assert_eq!(phone.as_str(), "+1 555-1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from trimmed input.
    ///
    /// # Errors
    ///
    /// - `ValidationError::RequiredFieldMissing` if nothing is left after trimming
    /// - `ValidationError::InvalidNumber` if the value breaks the phone grammar
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let phone = phone.as_ref().trim();

        if phone.is_empty() {
            return Err(ValidationError::RequiredFieldMissing(Field::Number));
        }

        if !PHONE_REGEX.is_match(phone) {
            return Err(ValidationError::InvalidNumber(phone.to_string()));
        }

        Ok(Self(phone.to_string()))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serialized as the plain trimmed string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Deserializing re-runs the phone grammar
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_common_formats() {
        for number in [
            "+1 555-1234",
            "+1 555-9999",
            "12345",
            "123",
            "459-12-56",
            "(044) 123-45-67",
            "+38 (050) 123 45 67",
            "555.123.4567",
            "+14155551234",
        ] {
            assert!(PhoneNumber::new(number).is_ok(), "should accept {number}");
        }
    }

    #[test]
    fn test_phone_rejects_non_numeric() {
        for number in ["abc", "555-CALL-NOW", "12", "invalid@phone", "+", "1 2 3 4 5 6"] {
            assert_eq!(
                PhoneNumber::new(number),
                Err(ValidationError::InvalidNumber(number.to_string())),
                "should reject {number}"
            );
        }
    }

    #[test]
    fn test_phone_required() {
        assert_eq!(
            PhoneNumber::new("   "),
            Err(ValidationError::RequiredFieldMissing(Field::Number))
        );
    }

    #[test]
    fn test_phone_trims() {
        let phone = PhoneNumber::new("\t+1 555-1234\n").unwrap();
        assert_eq!(phone.as_str(), "+1 555-1234");
    }

    #[test]
    fn test_phone_serde() {
        let phone = PhoneNumber::new("+1-555-1234").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"+1-555-1234\"");

        let bad: Result<PhoneNumber, _> = serde_json::from_str("\"invalid\"");
        assert!(bad.is_err());
    }
}
