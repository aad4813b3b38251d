//! Data models for phonebook entries.
//!
//! Raw form input, validated candidates and stored contacts.

pub mod contact;

pub use contact::{Contact, ContactCandidate, NormalizedContact};
