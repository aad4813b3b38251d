//! PersonName value object.

use super::errors::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One or more letters, then any number of groups made of an optional
/// apostrophe, dash or space followed by a letter or space, then letters.
/// Letters are Latin or Cyrillic script letters, accented forms included.
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    const LETTER: &str = r"[\p{L}&&[\p{Latin}\p{Cyrillic}]]";
    const LETTER_OR_SPACE: &str = r"[ \p{L}&&[ \p{Latin}\p{Cyrillic}]]";
    let pattern = format!(
        r"^{LETTER}+(?:(?:['’\- ]{LETTER_OR_SPACE})?{LETTER}*)*$",
        LETTER = LETTER,
        LETTER_OR_SPACE = LETTER_OR_SPACE,
    );
    Regex::new(&pattern).expect("Failed to compile person name regex")
});

/// A type-safe wrapper for a contact's display name.
///
/// Compound and particled names are allowed ("Jacob Mercer", "d'Artagnan",
/// "Анна-Марія"), digits and other symbols are not.
///
/// # Example
///
/// ```
/// use phonebook_mcp_server::domain::PersonName;
///
/// let name = PersonName::new("  Jacob Mercer ").unwrap();
/// assert_eq!(name.as_str(), "Jacob Mercer");
/// assert!(PersonName::new("Jo3").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName from trimmed input.
    ///
    /// # Errors
    ///
    /// - `ValidationError::RequiredFieldMissing` if nothing is left after trimming
    /// - `ValidationError::InvalidName` if the value breaks the name grammar
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();

        if name.is_empty() {
            return Err(ValidationError::RequiredFieldMissing(Field::Name));
        }

        if !NAME_REGEX.is_match(name) {
            return Err(ValidationError::InvalidName(name.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Names read back from JSON go through the same grammar
impl<'de> Deserialize<'de> for PersonName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PersonName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_compound_names() {
        for name in [
            "Adrian",
            "Jacob Mercer",
            "d'Artagnan",
            "Charles de Batz de Castelmore d'Artagnan",
            "Jean-Luc",
            "O’Brien",
            "José Álvarez",
            "Анна-Марія",
            "Їжак Ґудзь",
            "Mary  Ann",
        ] {
            assert!(PersonName::new(name).is_ok(), "should accept {name}");
        }
    }

    #[test]
    fn test_name_rejects_digits_and_symbols() {
        for name in ["Jo3", "R2D2", "-Ann", "Ann-", "A--B", "Ann!", "a_b", "'quoted'", "李雷"] {
            assert_eq!(
                PersonName::new(name),
                Err(ValidationError::InvalidName(name.to_string())),
                "should reject {name}"
            );
        }
    }

    #[test]
    fn test_name_required() {
        assert_eq!(
            PersonName::new(""),
            Err(ValidationError::RequiredFieldMissing(Field::Name))
        );
        assert_eq!(
            PersonName::new(" \t "),
            Err(ValidationError::RequiredFieldMissing(Field::Name))
        );
    }

    #[test]
    fn test_name_trims() {
        let name = PersonName::new("  Rosie Simpson\n").unwrap();
        assert_eq!(name.as_str(), "Rosie Simpson");
        assert_eq!(format!("{}", name), "Rosie Simpson");
    }

    #[test]
    fn test_name_serde() {
        let name: PersonName = serde_json::from_str("\"Eden Clements\"").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Eden Clements\"");

        let bad: Result<PersonName, _> = serde_json::from_str("\"Eden 2\"");
        assert!(bad.is_err());
    }
}
