use phonebook_mcp_server::domain::ContactId;
use phonebook_mcp_server::models::{Contact, NormalizedContact};
use phonebook_mcp_server::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps contacts in memory and tracks method calls for verification.
/// Clones share state, so a test can keep a handle after boxing one copy
/// into a service.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    next_id: Arc<Mutex<u64>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn add(&mut self, contact: NormalizedContact) -> Contact {
        self.track_call("add");

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = ContactId::new(format!("mock-{}", *next_id)).unwrap();

        let contact = Contact::from_normalized(id, contact);
        self.contacts.lock().unwrap().push(contact.clone());
        contact
    }

    fn remove(&mut self, id: &str) -> bool {
        self.track_call("remove");

        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| c.id().as_str() != id);
        contacts.len() != before
    }

    fn list(&self) -> Vec<Contact> {
        self.track_call("list");
        self.contacts.lock().unwrap().clone()
    }

    fn get(&self, id: &str) -> Option<Contact> {
        self.track_call("get");
        self.contacts
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id().as_str() == id)
            .cloned()
    }

    fn len(&self) -> usize {
        self.track_call("len");
        self.contacts.lock().unwrap().len()
    }
}
