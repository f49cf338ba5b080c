//! Entry points for an embedding host
//!
//! These functions wrap a process-wide [`McpServer`] built from the default
//! configuration. Every function returns an owned `String`, so callers never
//! observe a shared output buffer.

use cesium_mcp_lib::gazetteer;
use once_cell::sync::Lazy;
use serde_json::json;
use tracing::error;

use crate::server::{McpServer, ServerConfig};
use crate::tools;

static SERVER: Lazy<McpServer> = Lazy::new(|| McpServer::new(ServerConfig::default()));

/// One-time setup. Safe to call repeatedly.
pub fn initialize() {
    Lazy::force(&SERVER);
    tools::definitions_json();
}

/// Handle one JSON-RPC message; an empty string means "send nothing".
pub fn handle_message(message: &str) -> String {
    SERVER.handle_message(message).unwrap_or_default()
}

/// The tool catalog as a JSON array.
pub fn tool_definitions() -> &'static str {
    tools::definitions_json()
}

/// `{"found":true,"longitude":..,"latitude":..}` or
/// `{"found":false,"error":"Location not found: <name>"}`.
pub fn resolve_location(name: &str) -> String {
    match gazetteer::resolve(name) {
        Some(at) => json!({
            "found": true,
            "longitude": at.longitude,
            "latitude": at.latitude,
        }),
        None => json!({
            "found": false,
            "error": format!("Location not found: {}", name),
        }),
    }
    .to_string()
}

/// Every gazetteer entry as `[{"name":..,"longitude":..,"latitude":..}, ...]`.
pub fn list_locations() -> String {
    gazetteer::to_json(gazetteer::list_all()).unwrap_or_else(|err| {
        error!("failed to serialize location list: {}", err);
        "[]".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_initialize_is_idempotent() {
        initialize();
        initialize();
        assert!(!tool_definitions().is_empty());
    }

    #[test]
    fn test_handle_message_notification_is_empty() {
        assert_eq!(
            handle_message(r#"{"jsonrpc":"2.0","method":"initialized"}"#),
            ""
        );
    }

    #[test]
    fn test_resolve_location_found() {
        let value: Value = serde_json::from_str(&resolve_location("Seattle")).unwrap();
        assert_eq!(value["found"], true);
        assert_eq!(value["longitude"], -122.3321);
        assert_eq!(value["latitude"], 47.6062);
    }

    #[test]
    fn test_resolve_location_missing() {
        let value: Value = serde_json::from_str(&resolve_location("Nowhere \"Land\"")).unwrap();
        assert_eq!(value["found"], false);
        assert_eq!(value["error"], "Location not found: Nowhere \"Land\"");
    }

    #[test]
    fn test_list_locations_is_full_table() {
        let value: Value = serde_json::from_str(&list_locations()).unwrap();
        let list = value.as_array().unwrap();
        assert_eq!(list.len(), gazetteer::count());
        assert_eq!(list[0]["name"], "new york");
    }
}
