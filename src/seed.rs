//! Startup seed contacts.
//!
//! A seed file is a JSON array of `{"name": ..., "number": ...}` objects.
//! It is only ever read. Entries go through the same validation as form
//! input, and a seed is applied all-or-nothing.

use crate::error::{SeedError, SeedResult};
use crate::models::ContactCandidate;
use crate::services::ContactService;
use crate::validation::validate;
use std::fs;
use std::path::Path;

/// Read seed candidates from `path`.
pub fn load_seed_file(path: &Path) -> SeedResult<Vec<ContactCandidate>> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_seed(&raw)
}

/// Parse seed candidates from a JSON string.
pub fn parse_seed(raw: &str) -> SeedResult<Vec<ContactCandidate>> {
    Ok(serde_json::from_str(raw)?)
}

/// Submit every candidate to `service`, in order.
///
/// All entries are validated before the first one is added, so an invalid
/// entry leaves the service untouched. Returns the number of contacts added.
pub fn apply_seed(service: &mut ContactService, candidates: &[ContactCandidate]) -> SeedResult<usize> {
    for (index, candidate) in candidates.iter().enumerate() {
        validate(candidate).map_err(|errors| SeedError::InvalidEntry { index, errors })?;
    }

    for (index, candidate) in candidates.iter().enumerate() {
        service
            .submit(candidate)
            .map_err(|errors| SeedError::InvalidEntry { index, errors })?;
    }

    tracing::info!(count = candidates.len(), "Seed contacts loaded");
    Ok(candidates.len())
}
