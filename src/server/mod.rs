//! MCP server implementation for the phonebook.
//!
//! This module provides the MCP protocol server that exposes the contact
//! session to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::PhonebookMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the phonebook MCP server with stdio transport.
///
/// Communicates via stdin/stdout and returns once the client disconnects.
pub async fn run_server(server: PhonebookMcpServer) -> Result<()> {
    // Serve over stdin/stdout
    let service = server.serve(stdio()).await?;

    // Block until the client disconnects
    service.waiting().await?;

    Ok(())
}
