use crate::domain::ContactId;
use crate::models::{Contact, NormalizedContact};
use crate::repositories::id_generator::UuidGenerator;
use crate::repositories::traits::{ContactRepository, IdGenerator};
use std::collections::HashSet;

/// In-memory, insertion-ordered contact store.
///
/// Every id ever issued is remembered, so an id is never handed out twice
/// over the lifetime of the store, even after the contact that held it has
/// been removed.
pub struct InMemoryContactRepository {
    contacts: Vec<Contact>,
    issued: HashSet<ContactId>,
    ids: Box<dyn IdGenerator>,
}

impl InMemoryContactRepository {
    /// Create an empty store that issues UUID v4 ids.
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(UuidGenerator))
    }

    /// Create an empty store with a custom id source.
    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            contacts: Vec::new(),
            issued: HashSet::new(),
            ids,
        }
    }

    fn fresh_id(&mut self) -> ContactId {
        loop {
            let id = self.ids.next_id();
            if self.issued.insert(id.clone()) {
                return id;
            }
            tracing::warn!(id = %id, "Id generator returned an already issued id, retrying");
        }
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn add(&mut self, contact: NormalizedContact) -> Contact {
        let id = self.fresh_id();
        let contact = Contact::from_normalized(id, contact);
        self.contacts.push(contact.clone());

        tracing::debug!(id = %contact.id(), total = self.contacts.len(), "Contact added");
        contact
    }

    fn remove(&mut self, id: &str) -> bool {
        match self.contacts.iter().position(|c| c.id().as_str() == id) {
            Some(index) => {
                self.contacts.remove(index);
                tracing::debug!(id = %id, total = self.contacts.len(), "Contact removed");
                true
            }
            None => {
                tracing::debug!(id = %id, "Remove requested for unknown contact");
                false
            }
        }
    }

    fn list(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    fn get(&self, id: &str) -> Option<Contact> {
        self.contacts.iter().find(|c| c.id().as_str() == id).cloned()
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}
