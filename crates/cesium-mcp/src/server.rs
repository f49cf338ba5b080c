//! Request routing and server configuration
//!
//! [`McpServer`] turns one inbound JSON-RPC message into at most one
//! response. It holds only immutable configuration, so a single instance can
//! be shared freely between callers.

use cesium_mcp_lib::json;
use cesium_mcp_lib::RequestId;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::{resources, tools, Error, Result};

/// MCP protocol revision spoken by this server
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Name reported in `serverInfo`
pub const SERVER_NAME: &str = "cesium-mcp";

/// Version reported in `serverInfo`
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default response capacity in bytes
pub const MAX_RESPONSE_SIZE: usize = 65_536;

/// Smallest accepted response capacity; an overflow error envelope always fits.
pub const MIN_RESPONSE_SIZE: usize = 1_024;

/// Environment variable overriding the response capacity
pub const MAX_RESPONSE_ENV: &str = "CESIUM_MCP_MAX_RESPONSE_BYTES";

/// Runtime configuration for [`McpServer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub protocol_version: String,
    pub name: String,
    pub version: String,
    /// Largest response, in bytes, the server will emit
    pub max_response_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION.to_string(),
            name: SERVER_NAME.to_string(),
            version: SERVER_VERSION.to_string(),
            max_response_bytes: MAX_RESPONSE_SIZE,
        }
    }
}

impl ServerConfig {
    /// Defaults, with `CESIUM_MCP_MAX_RESPONSE_BYTES` applied when set.
    ///
    /// An unparsable value is logged and ignored.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(MAX_RESPONSE_ENV) {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(bytes) => config.with_max_response_bytes(bytes),
                Err(_) => {
                    warn!(value = %raw, "ignoring invalid {}", MAX_RESPONSE_ENV);
                    config
                }
            },
            Err(_) => config,
        }
    }

    /// Override the response capacity, clamped to [`MIN_RESPONSE_SIZE`].
    pub fn with_max_response_bytes(mut self, bytes: usize) -> Self {
        self.max_response_bytes = bytes.max(MIN_RESPONSE_SIZE);
        self
    }
}

/// Stateless JSON-RPC dispatcher for the MCP methods
#[derive(Debug, Clone, Default)]
pub struct McpServer {
    config: ServerConfig,
}

enum Outcome {
    Reply(RequestId, Result<String>),
    Silent,
}

impl McpServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Handle one inbound message.
    ///
    /// Returns `None` for notifications and for inbound responses (messages
    /// without a `method`), which must not be answered.
    pub fn handle_message(&self, message: &str) -> Option<String> {
        let (id, outcome) = match self.route(message) {
            Outcome::Reply(id, outcome) => (id, outcome),
            Outcome::Silent => return None,
        };

        let response = match outcome {
            Ok(result) => json::success_response(&id, &result),
            Err(err) => err.to_response(&id),
        };

        Some(self.bounded(response, &id))
    }

    /// Replace a response over capacity with an internal error envelope.
    fn bounded(&self, response: String, id: &RequestId) -> String {
        let limit = self.config.max_response_bytes;
        let Err(err) = json::ensure_within(&response, limit) else {
            return response;
        };

        warn!(%id, needed = response.len(), limit, "response exceeds capacity");
        let overflow = Error::from(err);
        let envelope = overflow.to_response(id);
        if json::ensure_within(&envelope, limit).is_ok() {
            envelope
        } else {
            // Only reachable with an oversized string id.
            overflow.to_response(&RequestId::Null)
        }
    }

    fn route(&self, message: &str) -> Outcome {
        match json::get_string(message, "jsonrpc") {
            Some(json::JSONRPC_VERSION) => {}
            None if !message.contains("\"jsonrpc\"") => {
                warn!("rejecting message without jsonrpc field");
                return Outcome::Reply(
                    RequestId::Null,
                    Err(Error::invalid_request("Missing jsonrpc field")),
                );
            }
            _ => {
                warn!("rejecting message with unsupported jsonrpc version");
                return Outcome::Reply(
                    RequestId::Null,
                    Err(Error::invalid_request("Invalid JSON-RPC version")),
                );
            }
        }

        let id = RequestId::extract(message);

        let Some(method) = json::get_string(message, "method") else {
            debug!(%id, "ignoring inbound response");
            return Outcome::Silent;
        };

        let params = json::get_object(message, "params").unwrap_or("{}");
        debug!(method, %id, "dispatching request");

        let result = match method {
            "initialize" => Ok(self.initialize_result()),
            "initialized" | "notifications/initialized" => {
                info!("client initialized");
                return Outcome::Silent;
            }
            "tools/list" => Ok(format!("{{\"tools\":{}}}", tools::definitions_json())),
            "tools/call" => tools::call(params),
            "resources/list" => resources::list_json(),
            "resources/read" => resources::read(params),
            "ping" => Ok("{}".to_string()),
            other => {
                warn!(method = other, "unknown method");
                Err(Error::method_not_found(other))
            }
        };

        Outcome::Reply(id, result)
    }

    fn initialize_result(&self) -> String {
        info!(
            protocol = %self.config.protocol_version,
            "initialize"
        );
        json!({
            "protocolVersion": self.config.protocol_version,
            "serverInfo": {
                "name": self.config.name,
                "version": self.config.version,
            },
            "capabilities": { "tools": {}, "resources": {} }
        })
        .to_string()
    }
}
