//! JSON-RPC error codes and the error type surfaced in `error` envelopes.

use cesium_mcp_lib::json;
use cesium_mcp_lib::RequestId;
use thiserror::Error;

/// Result type for dispatcher operations
pub type Result<T> = std::result::Result<T, Error>;

/// Standard JSON-RPC 2.0 error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    ParseError = -32700,
    InvalidRequest = -32600,
    MethodNotFound = -32601,
    InvalidParams = -32602,
    InternalError = -32603,
}

impl ErrorCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Protocol-level failure reported to the client
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message} ({code:?})")]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(
            ErrorCode::MethodNotFound,
            format!("Method not found: {}", method),
        )
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidParams, message)
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, reason)
    }

    /// Envelope for a response that did not fit the configured capacity
    pub fn response_too_large(needed: usize, limit: usize) -> Self {
        Self::internal(format!(
            "Response too large ({} bytes, limit {})",
            needed, limit
        ))
    }

    /// Render the full JSON-RPC error envelope for `id`
    pub fn to_response(&self, id: &RequestId) -> String {
        json::error_response(id, self.code.code(), &self.message)
    }
}

impl From<cesium_mcp_lib::Error> for Error {
    fn from(err: cesium_mcp_lib::Error) -> Self {
        match err {
            cesium_mcp_lib::Error::OutputTooLarge { limit, needed } => {
                Self::response_too_large(needed, limit)
            }
            other => Self::internal(other.to_string()),
        }
    }
}
