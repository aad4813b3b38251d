//! Contact input validation.
//!
//! Maps raw form input to either a normalized contact or a set of
//! field-level violations.

pub mod field_errors;
pub mod validator;

pub use field_errors::FieldErrors;
pub use validator::validate;
