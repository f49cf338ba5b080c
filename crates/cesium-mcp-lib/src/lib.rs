//! Cesium MCP library entry points.
//!
//! This crate holds the pieces of the adapter that do not depend on the
//! protocol loop: a minimal JSON field scanner and envelope writer, the
//! static gazetteer used to turn place names into coordinates, and the
//! scene command formatter consumed by the globe front end. Higher-level
//! consumers (the MCP server, the CLI) should only depend on the items
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod commands;
pub mod error;
pub mod gazetteer;
pub mod json;

pub use commands::{Dimensions, PlacementTool, SceneCommand};
pub use error::{Error, Result};
pub use gazetteer::{Coordinates, Location};
pub use json::RequestId;
