//! Phonebook MCP Server - a validated, filterable contact list served over
//! the Model Context Protocol.
//!
//! Contacts are added through a pure validator, kept in an insertion-ordered
//! in-memory store and shown through a case-insensitive name filter.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (ids, names, phone numbers)
//! - **models**: Raw candidates, normalized candidates and stored contacts
//! - **validation**: The pure form validator and field-level errors
//! - **repositories**: The contact store trait and its in-memory implementation
//! - **filter**: Derived name-filtered views
//! - **services**: Session state and the observer channel for views
//! - **seed**: Optional startup contacts from a JSON file
//! - **config**: Configuration from environment variables
//! - **error**: Startup error types
//! - **server**: MCP protocol server

pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod server;
pub mod services;
pub mod validation;

pub use config::{Config, IdStrategy};
pub use domain::{ContactId, Field, PersonName, PhoneNumber, ValidationError};
pub use error::{ConfigError, SeedError};
pub use filter::{visible, NameFilter};
pub use models::{Contact, ContactCandidate, NormalizedContact};
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use server::PhonebookMcpServer;
pub use services::{ContactService, ContactView};
pub use validation::{validate, FieldErrors};
