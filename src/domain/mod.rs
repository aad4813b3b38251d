//! Domain value objects and types.
//!
//! Type-safe wrappers for contact ids, display names and phone numbers.
//! Each one validates at construction, so an invalid value cannot be
//! represented anywhere else in the crate.

pub mod contact_id;
pub mod errors;
pub mod person_name;
pub mod phone;

pub use contact_id::ContactId;
pub use errors::{Field, ValidationError, INVALID_NAME_MESSAGE, INVALID_NUMBER_MESSAGE};
pub use person_name::PersonName;
pub use phone::PhoneNumber;
