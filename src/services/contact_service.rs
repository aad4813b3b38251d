//! Contact session service.
//!
//! Owns the store and the current filter query, handles the three input
//! events (submit, delete, filter change) and publishes the re-derived view
//! after every state change.

use crate::filter::visible;
use crate::models::{Contact, ContactCandidate};
use crate::repositories::ContactRepository;
use crate::validation::{validate, FieldErrors};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// What a list renderer needs: the active filter and the visible contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactView {
    /// Filter query as last entered
    pub filter: String,

    /// Number of contacts in the store, ignoring the filter
    pub total: usize,

    /// Contacts matching the filter, in insertion order
    pub contacts: Vec<Contact>,
}

/// Session state for one phonebook.
///
/// State flows one way: events mutate the store or the filter, the view is
/// derived from both, and subscribers receive the new view.
pub struct ContactService {
    repository: Box<dyn ContactRepository>,
    filter: String,
    publisher: watch::Sender<ContactView>,
}

impl ContactService {
    /// Create a service over `repository` with an empty filter.
    pub fn new(repository: Box<dyn ContactRepository>) -> Self {
        let initial = ContactView {
            filter: String::new(),
            total: repository.len(),
            contacts: repository.list(),
        };
        let (publisher, _) = watch::channel(initial);

        Self {
            repository,
            filter: String::new(),
            publisher,
        }
    }

    /// Validate and add a contact.
    ///
    /// Nothing is stored and nothing is published when validation fails.
    pub fn submit(&mut self, candidate: &ContactCandidate) -> Result<Contact, FieldErrors> {
        let normalized = validate(candidate).map_err(|errors| {
            tracing::debug!(errors = %errors, "Contact rejected by validation");
            errors
        })?;

        let contact = self.repository.add(normalized);
        tracing::info!(id = %contact.id(), "Contact submitted");

        self.publish();
        Ok(contact)
    }

    /// Remove a contact by id. Returns whether it existed.
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.repository.remove(id);
        if removed {
            tracing::info!(id = %id, "Contact deleted");
            self.publish();
        }
        removed
    }

    /// Replace the filter query and re-derive the view.
    pub fn filter_change(&mut self, query: impl Into<String>) -> ContactView {
        self.filter = query.into();
        tracing::debug!(filter = %self.filter, "Filter changed");
        self.publish()
    }

    /// The current filter query.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Look up one contact by id, ignoring the filter.
    pub fn get(&self, id: &str) -> Option<Contact> {
        self.repository.get(id)
    }

    /// Snapshot of every stored contact, ignoring the filter.
    pub fn contacts(&self) -> Vec<Contact> {
        self.repository.list()
    }

    /// Derive the current view from store contents and filter.
    pub fn view(&self) -> ContactView {
        let snapshot = self.repository.list();
        ContactView {
            filter: self.filter.clone(),
            total: snapshot.len(),
            contacts: visible(&snapshot, &self.filter),
        }
    }

    /// Receive every view published from now on.
    ///
    /// The receiver starts with the latest published view already marked
    /// as seen.
    pub fn subscribe(&self) -> watch::Receiver<ContactView> {
        self.publisher.subscribe()
    }

    fn publish(&self) -> ContactView {
        let view = self.view();
        self.publisher.send_replace(view.clone());
        view
    }
}
