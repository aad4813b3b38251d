//! MCP tool handlers for the phonebook server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::models::ContactCandidate;
use crate::services::ContactService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The phonebook MCP server that exposes the contact session as tools.
#[derive(Clone)]
pub struct PhonebookMcpServer {
    contact_service: Arc<RwLock<ContactService>>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for PhonebookMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "phonebook-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for a phonebook - add contacts with validated names and phone numbers, delete them by id, and filter the list by name.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct AddContactToolParams {
    name: String,
    number: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    contact_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FilterContactsParams {
    #[serde(default)]
    query: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Serialize a value as a single pretty-printed text content block
fn json_text(value: &impl serde::Serialize) -> Result<Vec<Content>, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(vec![Content::text(text)])
}

// Tool router implementation
#[tool_router]
impl PhonebookMcpServer {
    /// Create a new phonebook MCP server over a shared contact session.
    pub fn new(contact_service: Arc<RwLock<ContactService>>) -> Self {
        Self {
            contact_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Validate and add a contact.
    #[tool(
        description = "Add a contact. The name may contain only letters, apostrophe, dash and spaces; the number must be digits and may contain spaces, dashes, parentheses and a leading +. Returns the stored contact with its id, or per-field error messages."
    )]
    async fn add_contact(
        &self,
        params: Parameters<AddContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let candidate = ContactCandidate::new(params.name, params.number);

        tracing::info!("MCP Handler: add_contact called");

        let mut service = self.contact_service.write().await;
        match service.submit(&candidate) {
            Ok(contact) => Ok(CallToolResult::success(json_text(&contact)?)),
            // Validation failures are tool errors, not protocol errors
            Err(errors) => {
                tracing::debug!("Rejected contact: {}", errors);
                Ok(CallToolResult::error(json_text(&serde_json::json!({
                    "errors": errors,
                }))?))
            }
        }
    }

    /// Delete a contact by id.
    #[tool(
        description = "Delete a contact by id. Deleting an unknown id is not an error; the result reports whether anything was removed."
    )]
    async fn delete_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: delete_contact called");

        // Unknown ids are a no-op
        let removed = self
            .contact_service
            .write()
            .await
            .delete(&params.contact_id);

        Ok(CallToolResult::success(json_text(&serde_json::json!({
            "contact_id": params.contact_id,
            "removed": removed,
        }))?))
    }

    /// Change the name filter and return the visible contacts.
    #[tool(
        description = "Find contacts by name. Sets the case-insensitive name filter and returns the matching contacts in the order they were added. An empty query shows every contact."
    )]
    async fn filter_contacts(
        &self,
        params: Parameters<FilterContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let view = self
            .contact_service
            .write()
            .await
            .filter_change(params.query);

        Ok(CallToolResult::success(json_text(&view)?))
    }

    /// List the contacts visible under the current filter.
    #[tool(description = "List contacts visible under the current name filter, in the order they were added")]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        let view = self.contact_service.read().await.view();

        Ok(CallToolResult::success(json_text(&view)?))
    }

    /// Retrieve a single contact by id.
    #[tool(description = "Retrieve a single contact by id")]
    async fn get_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let contact = self
            .contact_service
            .read()
            .await
            .get(&params.contact_id)
            .ok_or_else(|| McpError {
                code: ErrorCode::INVALID_PARAMS,
                message: Cow::from(format!("Contact not found: {}", params.contact_id)),
                data: None,
            })?;

        Ok(CallToolResult::success(json_text(&contact)?))
    }
}
