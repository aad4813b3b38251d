//! Contact form validation.
//!
//! [`validate`] is a pure function: it never touches the store, performs no
//! I/O and never assigns ids. That keeps the rule set testable without any
//! server or session around it.

use super::field_errors::FieldErrors;
use crate::domain::{Field, PersonName, PhoneNumber};
use crate::models::{ContactCandidate, NormalizedContact};

/// Validate a raw candidate.
///
/// Both fields are trimmed and checked on every call, so a failure reports
/// every broken field at once.
///
/// # Errors
///
/// Returns [`FieldErrors`] with one entry per failing field.
///
/// # Example
///
/// ```
/// use phonebook_mcp_server::models::ContactCandidate;
/// use phonebook_mcp_server::validation::validate;
///
/// let ok = validate(&ContactCandidate::new(" Jacob Mercer ", "+1 555-1234")).unwrap();
/// assert_eq!(ok.name().as_str(), "Jacob Mercer");
///
/// assert!(validate(&ContactCandidate::new("Jo3", "12345")).is_err());
/// ```
pub fn validate(candidate: &ContactCandidate) -> Result<NormalizedContact, FieldErrors> {
    let name = PersonName::new(&candidate.name);
    let number = PhoneNumber::new(&candidate.number);

    match (name, number) {
        (Ok(name), Ok(number)) => Ok(NormalizedContact::new(name, number)),
        (name, number) => {
            let mut errors = FieldErrors::new();
            if let Err(e) = name {
                errors.insert(Field::Name, e);
            }
            if let Err(e) = number {
                errors.insert(Field::Number, e);
            }
            Err(errors)
        }
    }
}
