//! Phonebook MCP Server - Main entry point
//!
//! Serves an in-memory phonebook session over the Model Context Protocol
//! (MCP) on stdio.

use anyhow::Result;
use phonebook_mcp_server::repositories::{ContactRepository, InMemoryContactRepository};
use phonebook_mcp_server::seed::{apply_seed, load_seed_file};
use phonebook_mcp_server::{Config, ContactService, PhonebookMcpServer};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!(id_strategy = %cfg.id_strategy, "Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Empty phonebook, optionally seeded from a file
    let repository = Box::new(InMemoryContactRepository::with_id_generator(
        config.id_strategy.generator(),
    )) as Box<dyn ContactRepository>;
    let mut contact_service = ContactService::new(repository);

    if let Some(path) = &config.seed_file {
        let seeded = load_seed_file(path)
            .and_then(|candidates| apply_seed(&mut contact_service, &candidates));
        match seeded {
            Ok(count) => info!("Seeded {} contacts from {}", count, path.display()),
            Err(e) => {
                error!("Failed to load seed file: {}", e);
                return Err(e.into());
            }
        }
    }

    // One shared session for every tool call
    let server = PhonebookMcpServer::new(Arc::new(RwLock::new(contact_service)));

    info!("Starting MCP server with stdio transport");
    phonebook_mcp_server::server::run_server(server).await?;

    info!("Phonebook MCP Server shutdown complete");
    Ok(())
}
