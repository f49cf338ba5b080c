//! MCP (Model Context Protocol) adapter for a Cesium globe
//!
//! This crate lets an AI assistant drive a Cesium 3D globe: it answers
//! JSON-RPC 2.0 requests for the MCP methods, resolves place names through
//! the gazetteer and turns location tools into scene commands the front end
//! applies.
//!
//! # Architecture
//!
//! - `server`: request routing and configuration
//! - `tools`: tool catalog and `tools/call` execution
//! - `resources`: read-only scene and gazetteer resources
//! - `error`: JSON-RPC error codes
//! - `boundary`: string-in/string-out entry points for an embedding host
//! - `transport`: newline-delimited stdio loop
//! - `logging`: stderr tracing setup
//!
//! # Transport
//!
//! The binary speaks newline-delimited JSON-RPC on stdio. All logging is
//! redirected to stderr to prevent stdout protocol corruption.

pub mod boundary;
pub mod error;
pub mod logging;
pub mod resources;
pub mod server;
pub mod tools;
pub mod transport;

pub use error::{Error, ErrorCode, Result};
pub use server::{McpServer, ServerConfig};
