mod id_generator;
mod memory_contact_repository;
mod traits;

pub use id_generator::{SequentialIdGenerator, UuidGenerator};
pub use memory_contact_repository::InMemoryContactRepository;
pub use traits::{ContactRepository, IdGenerator};
