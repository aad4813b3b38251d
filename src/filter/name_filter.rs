//! Name-based contact filtering.

use crate::models::Contact;

/// A prepared, case-insensitive name filter.
///
/// The query is lowercased once and matched as typed, surrounding spaces
/// included. An empty or whitespace-only query matches every contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    needle: String,
}

impl NameFilter {
    pub fn new(query: &str) -> Self {
        // Whitespace-only collapses to "match all"
        let needle = if query.trim().is_empty() {
            String::new()
        } else {
            query.to_lowercase()
        };
        Self { needle }
    }

    /// Whether this filter lets everything through.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether `contact`'s name contains the query, ignoring case.
    pub fn matches(&self, contact: &Contact) -> bool {
        self.is_empty() || contact.name().as_str().to_lowercase().contains(&self.needle)
    }

    /// Keep matching contacts, preserving snapshot order.
    pub fn apply(&self, snapshot: &[Contact]) -> Vec<Contact> {
        if self.is_empty() {
            return snapshot.to_vec();
        }
        snapshot
            .iter()
            .filter(|contact| self.matches(contact))
            .cloned()
            .collect()
    }
}

/// Contacts from `snapshot` whose name contains `query`, case-insensitively.
///
/// ```
/// use phonebook_mcp_server::filter::visible;
///
/// assert!(visible(&[], "anything").is_empty());
/// ```
pub fn visible(snapshot: &[Contact], query: &str) -> Vec<Contact> {
    NameFilter::new(query).apply(snapshot)
}
