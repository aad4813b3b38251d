use crate::domain::ContactId;
use crate::models::{Contact, NormalizedContact};

/// Repository for managing contacts.
///
/// Abstracts the ordered contact collection so the session layer can run
/// against the in-memory store or a test double.
pub trait ContactRepository: Send + Sync {
    /// Assign a fresh id, append the contact at the end and return it.
    ///
    /// Duplicate names or numbers are accepted; only ids are unique.
    fn add(&mut self, contact: NormalizedContact) -> Contact;

    /// Remove the contact with `id`. Returns whether anything was removed.
    fn remove(&mut self, id: &str) -> bool;

    /// Snapshot of all contacts in insertion order.
    fn list(&self) -> Vec<Contact>;

    /// Look up a single contact by id.
    fn get(&self, id: &str) -> Option<Contact>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Source of candidate contact ids.
///
/// Generators need not be collision-free on their own; the store rejects
/// any id it has already issued and asks again.
pub trait IdGenerator: Send + Sync {
    fn next_id(&mut self) -> ContactId;
}
