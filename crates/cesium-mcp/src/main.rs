use anyhow::Result;
use cesium_mcp::logging::{init_logging, LoggingConfig};
use cesium_mcp::transport::{run_server_loop, StdioTransport};
use cesium_mcp::{McpServer, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging MUST go to stderr; stdout carries the protocol.
    init_logging(&LoggingConfig::from_env())?;

    let server = McpServer::new(ServerConfig::from_env());
    let mut transport = StdioTransport::stdio();
    run_server_loop(&mut transport, &server).await
}
