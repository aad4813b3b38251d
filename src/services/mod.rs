//! Application service layer.
//!
//! Services hold the session state and orchestrate validation, the
//! repository and the filtered view. They sit between the MCP handlers and
//! the data layer.

mod contact_service;

pub use contact_service::{ContactService, ContactView};
