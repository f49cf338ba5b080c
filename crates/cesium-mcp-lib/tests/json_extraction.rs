//! Extraction behavior on realistic MCP messages.

use cesium_mcp_lib::json::{self, RequestId};

const TOOLS_CALL: &str = r##"{
    "jsonrpc": "2.0",
    "id": "call-9",
    "method": "tools/call",
    "params": {
        "name": "addBoxAtLocation",
        "arguments": {
            "location": "The Big Apple",
            "dimensions": { "x": 5, "y": 6, "z": 7 },
            "color": "#ff00ff"
        }
    }
}"##;

#[test]
fn nested_extraction_narrows_step_by_step() {
    let params = json::get_object(TOOLS_CALL, "params").expect("params present");
    assert_eq!(json::get_string(params, "name"), Some("addBoxAtLocation"));

    let args = json::get_object(params, "arguments").expect("arguments present");
    assert_eq!(json::get_string(args, "location"), Some("The Big Apple"));
    assert_eq!(json::get_string(args, "color"), Some("#ff00ff"));

    let dims = json::get_object(args, "dimensions").expect("dimensions present");
    assert_eq!(json::get_number(dims, "y"), Some(6.0));
}

#[test]
fn string_id_is_kept_verbatim() {
    let id = RequestId::extract(TOOLS_CALL);
    assert_eq!(id, RequestId::String("call-9".to_string()));
    assert_eq!(id.to_string(), "\"call-9\"");
}

#[test]
fn first_occurrence_wins_regardless_of_depth() {
    // Documented limitation: lookups are not depth-aware.
    let message = r#"{"params":{"id":5},"id":1}"#;
    assert_eq!(json::get_int(message, "id"), Some(5));
}

#[test]
fn escaped_quotes_stay_escaped_after_extraction() {
    let message = r#"{"text":"He said \"go\"","n":1}"#;
    assert_eq!(json::get_string(message, "text"), Some(r#"He said \"go\""#));
    assert_eq!(json::get_int(message, "n"), Some(1));
}

#[test]
fn escaped_output_embeds_as_valid_json() {
    let original = "tab\there \"quoted\" back\\slash";
    let document = format!("{{\"value\":\"{}\"}}", json::escape_string(original));
    let parsed: serde_json::Value = serde_json::from_str(&document).unwrap();
    assert_eq!(parsed["value"], original);
}
