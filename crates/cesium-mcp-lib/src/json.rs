//! Minimal JSON field scanner and JSON-RPC envelope writer.
//!
//! The scanner never builds a parse tree. It searches the message text for
//! `"key"` followed by a colon and sniffs the value that follows: a quoted
//! string, a brace-delimited object, or a bare numeric token. This is enough
//! for the handful of known fields an MCP request carries and keeps every
//! extraction zero-copy.
//!
//! # Preconditions
//!
//! - Lookups are not depth-aware. The first `"key":` occurrence in the text
//!   wins, so callers narrow the text first (extract `params`, then look up
//!   `name` inside it).
//! - String values are returned in their raw, escaped form. Escape
//!   sequences are never decoded, which means [`escape_string`] followed by
//!   [`get_string`] yields the escaped text, not the original input.
//! - Object extraction balances braces and skips over quoted strings, but
//!   does not validate the object it returns.

use std::fmt;

use crate::error::{Error, Result};

/// Protocol version string every envelope carries.
pub const JSONRPC_VERSION: &str = "2.0";

/// Identifier of a JSON-RPC request as it appeared on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestId {
    Number(i64),
    /// Raw (still escaped) contents of a string id, without the quotes.
    String(String),
    #[default]
    Null,
}

impl RequestId {
    /// Extract the `id` field of a message: integer first, then string,
    /// otherwise `null`.
    pub fn extract(message: &str) -> Self {
        if let Some(id) = get_int(message, "id") {
            RequestId::Number(id)
        } else if let Some(id) = get_string(message, "id") {
            RequestId::String(id.to_string())
        } else {
            RequestId::Null
        }
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::Number(id) => write!(f, "{}", id),
            RequestId::String(raw) => write!(f, "\"{}\"", raw),
            RequestId::Null => f.write_str("null"),
        }
    }
}

/// Locate the first byte of the value stored under `key`.
fn value_start(json: &str, key: &str) -> Option<usize> {
    let pattern = format!("\"{}\"", key);
    let bytes = json.as_bytes();
    let mut offset = 0;

    while let Some(found) = json[offset..].find(&pattern) {
        let mut pos = offset + found + pattern.len();
        pos = skip_whitespace(bytes, pos);
        if bytes.get(pos) == Some(&b':') {
            return Some(skip_whitespace(bytes, pos + 1));
        }
        // Matched a string value rather than a key; keep looking.
        offset = offset + found + 1;
    }

    None
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t' | b'\n' | b'\r') {
        pos += 1;
    }
    pos
}

/// Index of the closing quote of a string whose opening quote is at `open`.
fn string_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut pos = open + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'"' => return Some(pos),
            _ => pos += 1,
        }
    }
    None
}

/// Extract the raw contents of a string value.
pub fn get_string<'a>(json: &'a str, key: &str) -> Option<&'a str> {
    let start = value_start(json, key)?;
    let bytes = json.as_bytes();
    if bytes.get(start) != Some(&b'"') {
        return None;
    }
    let end = string_end(bytes, start)?;
    Some(&json[start + 1..end])
}

/// Bare token following `key`, up to the next delimiter.
fn numeric_token<'a>(json: &'a str, key: &str) -> Option<&'a str> {
    let start = value_start(json, key)?;
    let bytes = json.as_bytes();
    let mut end = start;
    while end < bytes.len()
        && !matches!(
            bytes[end],
            b',' | b'}' | b']' | b' ' | b'\t' | b'\n' | b'\r'
        )
    {
        end += 1;
    }

    let token = &json[start..end];
    match token.as_bytes().first() {
        Some(b'-') | Some(b'0'..=b'9') => Some(token),
        _ => None,
    }
}

/// Extract a numeric value as `f64`. Values that overflow to infinity or
/// spell out `inf`/`nan` are not found.
pub fn get_number(json: &str, key: &str) -> Option<f64> {
    numeric_token(json, key)?
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Extract an integral value. Tokens with a fraction or exponent are not
/// integers and report "not found".
pub fn get_int(json: &str, key: &str) -> Option<i64> {
    numeric_token(json, key)?.parse().ok()
}

/// Extract a nested object verbatim, braces included.
pub fn get_object<'a>(json: &'a str, key: &str) -> Option<&'a str> {
    let start = value_start(json, key)?;
    let bytes = json.as_bytes();
    if bytes.get(start) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    let mut pos = start;
    while pos < bytes.len() {
        match bytes[pos] {
            b'"' => {
                pos = string_end(bytes, pos)?;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&json[start..=pos]);
                }
            }
            _ => {}
        }
        pos += 1;
    }

    None
}

/// Escape `input` for embedding between JSON string quotes.
pub fn escape_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    for c in input.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Decode the escape sequences of a raw string value returned by
/// [`get_string`]. Invalid escapes leave the raw text untouched.
pub fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }
    serde_json::from_str::<String>(&format!("\"{}\"", raw)).unwrap_or_else(|_| raw.to_string())
}

/// `{"jsonrpc":"2.0","id":<id>,"result":<result_json>}`
pub fn success_response(id: &RequestId, result_json: &str) -> String {
    format!(
        "{{\"jsonrpc\":\"{}\",\"id\":{},\"result\":{}}}",
        JSONRPC_VERSION, id, result_json
    )
}

/// `{"jsonrpc":"2.0","id":<id>,"error":{"code":<code>,"message":"<message>"}}`
pub fn error_response(id: &RequestId, code: i32, message: &str) -> String {
    format!(
        "{{\"jsonrpc\":\"{}\",\"id\":{},\"error\":{{\"code\":{},\"message\":\"{}\"}}}}",
        JSONRPC_VERSION,
        id,
        code,
        escape_string(message)
    )
}

/// Wrap a tool's textual output in the MCP tool-result shape.
pub fn tool_result(text: &str, is_error: bool) -> String {
    format!(
        "{{\"content\":[{{\"type\":\"text\",\"text\":\"{}\"}}],\"isError\":{}}}",
        escape_string(text),
        is_error
    )
}

/// Check that `output` fits within `limit` bytes.
pub fn ensure_within(output: &str, limit: usize) -> Result<()> {
    if output.len() > limit {
        return Err(Error::OutputTooLarge {
            limit,
            needed: output.len(),
        });
    }
    Ok(())
}
