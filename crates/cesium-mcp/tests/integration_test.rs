//! Integration tests for the MCP JSON-RPC protocol
//!
//! The first group drives the dispatcher through the embedding entry points;
//! the second runs the `cesium-mcp` binary with requests piped over stdin.

use assert_cmd::Command;
use cesium_mcp::boundary;
use predicates::prelude::*;
use serde_json::{json, Value};

/// Send a JSON-RPC request through the boundary and parse the response
fn send_request(request: Value) -> Value {
    let response = boundary::handle_message(&request.to_string());
    serde_json::from_str(&response).expect("response is valid JSON")
}

fn tool_text(name: &str, arguments: Value) -> String {
    let response = send_request(json!({
        "jsonrpc": "2.0",
        "id": 10,
        "method": "tools/call",
        "params": {"name": name, "arguments": arguments}
    }));
    assert_eq!(response["id"], 10);
    assert_eq!(response["result"]["isError"], false);
    response["result"]["content"][0]["text"]
        .as_str()
        .expect("text content")
        .to_string()
}

#[test]
fn test_initialize_protocol() {
    boundary::initialize();
    let response = send_request(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {}
    }));

    assert_eq!(response["jsonrpc"], "2.0");
    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(response["result"]["serverInfo"]["name"], "cesium-mcp");
    assert!(response["result"]["capabilities"]["tools"].is_object());
    assert!(response["result"]["capabilities"]["resources"].is_object());
}

#[test]
fn test_tools_list_matches_definitions() {
    let response = send_request(json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}));
    let definitions: Value = serde_json::from_str(boundary::tool_definitions()).unwrap();
    assert_eq!(response["result"]["tools"], definitions);
}

#[test]
fn test_resolve_location_seattle() {
    let text = tool_text("resolveLocation", json!({"location": "seattle"}));
    assert!(text.contains("-122.3321"));
    assert!(text.contains("47.6062"));
}

#[test]
fn test_fly_to_unknown_location_is_success_envelope() {
    let text = tool_text("flyToLocation", json!({"location": "Nowhere Special"}));
    assert!(text.contains("not found"));
}

#[test]
fn test_add_box_at_alias() {
    let text = tool_text(
        "addBoxAtLocation",
        json!({"location": "The Big Apple", "dimensions": {"x": 5, "y": 6, "z": 7}}),
    );
    let command: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(command["type"], "addBox");
    assert_eq!(command["longitude"], -74.006);
    assert_eq!(command["dimensions"]["z"], 7.0);
    assert_eq!(command["name"], "The Big Apple");
}

#[test]
fn test_label_text_is_decoded_then_reescaped() {
    let text = tool_text(
        "addLabelAtLocation",
        json!({"location": "london", "text": "Big \"Ben\""}),
    );
    let command: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(command["text"], "Big \"Ben\"");
}

#[test]
fn test_wrong_jsonrpc_version() {
    let response = send_request(json!({"jsonrpc": "1.0", "id": 3, "method": "ping"}));
    assert_eq!(response["error"]["code"], -32600);
    assert!(response["id"].is_null());
}

#[test]
fn test_initialized_notification_has_no_response() {
    let response = boundary::handle_message(r#"{"jsonrpc":"2.0","method":"initialized"}"#);
    assert!(response.is_empty());
}

#[test]
fn test_resources_read_locations() {
    let response = send_request(json!({
        "jsonrpc": "2.0",
        "id": 4,
        "method": "resources/read",
        "params": {"uri": "cesium://locations"}
    }));
    let text = response["result"]["contents"][0]["text"].as_str().unwrap();
    let names: Value = serde_json::from_str(text).unwrap();
    assert!(names.as_array().unwrap().contains(&json!("paris")));
}

#[test]
fn test_binary_stdio_round_trip() {
    let input = [
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/call",
               "params": {"name": "resolveLocation", "arguments": {"location": "Tokyo"}}}),
    ]
    .iter()
    .map(Value::to_string)
    .collect::<Vec<_>>()
    .join("\n");

    let output = Command::cargo_bin("cesium-mcp")
        .expect("binary exists")
        .env("RUST_LOG", "info")
        .write_stdin(format!("{}\n", input))
        .assert()
        .success()
        .stderr(predicate::str::contains("waiting for requests"))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let responses: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[1]["id"], 2);
    assert!(responses[1]["result"]["content"][0]["text"]
        .as_str()
        .unwrap()
        .starts_with("Location 'Tokyo' resolved to:"));
}

#[test]
fn test_binary_honours_response_limit() {
    Command::cargo_bin("cesium-mcp")
        .expect("binary exists")
        .env("CESIUM_MCP_MAX_RESPONSE_BYTES", "1024")
        .write_stdin("{\"jsonrpc\":\"2.0\",\"id\":5,\"method\":\"tools/list\"}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("-32603"))
        .stdout(predicate::str::contains("Response too large"));
}
