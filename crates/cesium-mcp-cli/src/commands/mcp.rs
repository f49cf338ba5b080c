//! `mcp` subcommand: serve the MCP protocol over stdio.

use anyhow::{Context, Result};
use cesium_mcp::transport::{run_server_loop, StdioTransport};
use cesium_mcp::{McpServer, ServerConfig};

use crate::GlobalOptions;

/// Server configuration from the environment, with CLI overrides applied.
pub fn server_config(global: &GlobalOptions) -> ServerConfig {
    let config = ServerConfig::from_env();
    match global.max_response_bytes {
        Some(bytes) => config.with_max_response_bytes(bytes),
        None => config,
    }
}

/// Public entrypoint orchestrating the MCP server lifecycle
pub async fn run(global: &GlobalOptions) -> Result<()> {
    let server = McpServer::new(server_config(global));
    let config = server.config();
    tracing::info!(
        name = %config.name,
        version = %config.version,
        protocol = %config.protocol_version,
        max_response_bytes = config.max_response_bytes,
        "Starting MCP server"
    );

    let mut transport = StdioTransport::stdio();
    run_server_loop(&mut transport, &server)
        .await
        .context("MCP server loop failed")
}
