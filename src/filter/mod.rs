//! Derived, filtered views over a contact snapshot.

pub mod name_filter;

pub use name_filter::{visible, NameFilter};
