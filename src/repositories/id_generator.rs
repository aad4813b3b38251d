use crate::domain::ContactId;
use crate::repositories::traits::IdGenerator;

/// Random UUID v4 ids. The default for live sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> ContactId {
        ContactId::generate()
    }
}

/// Deterministic `id-1`, `id-2`, ... ids.
///
/// Useful for tests and for seeded sessions where stable ids matter.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    issued: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> ContactId {
        self.issued += 1;
        ContactId::numbered(self.issued)
    }
}
