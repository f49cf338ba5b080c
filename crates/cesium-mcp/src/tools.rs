//! MCP tool catalog and `tools/call` execution
//!
//! Tools fall into two groups:
//! - location tools, executed here against the gazetteer: `resolveLocation`,
//!   `listLocations` and the `*AtLocation` placement tools, which answer with
//!   a scene command for the front end to apply
//! - direct tools (`flyTo`, `addSphere`, `clearAll`, ...), which carry their
//!   own coordinates and are acknowledged for the front end to execute
//!
//! Every outcome, including "not found" and missing arguments, is returned
//! as a tool result inside a success envelope.

use cesium_mcp_lib::gazetteer;
use cesium_mcp_lib::json;
use cesium_mcp_lib::PlacementTool;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::Error;

/// Upper bound on "did you mean" names appended to a miss.
const MAX_SUGGESTIONS: usize = 3;

static CATALOG: Lazy<Value> = Lazy::new(|| {
    json!([
        {
            "name": "flyTo",
            "description": "Fly the camera to a specific geographic location",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "longitude": {"type": "number", "minimum": -180, "maximum": 180},
                    "latitude": {"type": "number", "minimum": -90, "maximum": 90},
                    "height": {"type": "number"},
                    "duration": {"type": "number"}
                },
                "required": ["longitude", "latitude"]
            }
        },
        {
            "name": "lookAt",
            "description": "Orient the camera to look at a specific location",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "longitude": {"type": "number"},
                    "latitude": {"type": "number"},
                    "range": {"type": "number"}
                },
                "required": ["longitude", "latitude"]
            }
        },
        {
            "name": "zoom",
            "description": "Zoom the camera in or out",
            "inputSchema": {
                "type": "object",
                "properties": {"amount": {"type": "number"}},
                "required": ["amount"]
            }
        },
        {
            "name": "addPoint",
            "description": "Add a point marker",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "longitude": {"type": "number"},
                    "latitude": {"type": "number"},
                    "name": {"type": "string"},
                    "color": {"type": "string"}
                },
                "required": ["longitude", "latitude"]
            }
        },
        {
            "name": "addLabel",
            "description": "Add a text label",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "longitude": {"type": "number"},
                    "latitude": {"type": "number"},
                    "text": {"type": "string"}
                },
                "required": ["longitude", "latitude", "text"]
            }
        },
        {
            "name": "addSphere",
            "description": "Add a 3D sphere",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "longitude": {"type": "number"},
                    "latitude": {"type": "number"},
                    "height": {"type": "number"},
                    "radius": {"type": "number"},
                    "color": {"type": "string"}
                },
                "required": ["longitude", "latitude", "radius"]
            }
        },
        {
            "name": "addBox",
            "description": "Add a 3D box",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "longitude": {"type": "number"},
                    "latitude": {"type": "number"},
                    "dimensions": {"type": "object"},
                    "color": {"type": "string"}
                },
                "required": ["longitude", "latitude", "dimensions"]
            }
        },
        {
            "name": "addCylinder",
            "description": "Add a 3D cylinder",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "longitude": {"type": "number"},
                    "latitude": {"type": "number"},
                    "topRadius": {"type": "number"},
                    "bottomRadius": {"type": "number"},
                    "cylinderHeight": {"type": "number"}
                },
                "required": ["longitude", "latitude", "cylinderHeight"]
            }
        },
        {
            "name": "removeEntity",
            "description": "Remove an entity by ID",
            "inputSchema": {
                "type": "object",
                "properties": {"id": {"type": "string"}},
                "required": ["id"]
            }
        },
        {
            "name": "clearAll",
            "description": "Remove all entities",
            "inputSchema": {"type": "object", "properties": {}}
        },
        {
            "name": "resolveLocation",
            "description": "Resolve a location name to coordinates",
            "inputSchema": {
                "type": "object",
                "properties": {"location": {"type": "string"}},
                "required": ["location"]
            }
        },
        {
            "name": "listLocations",
            "description": "List known locations",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "prefix": {"type": "string"},
                    "limit": {"type": "integer", "minimum": 0}
                }
            }
        },
        {
            "name": "flyToLocation",
            "description": "Fly to a named location",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "location": {"type": "string"},
                    "height": {"type": "number"},
                    "duration": {"type": "number"}
                },
                "required": ["location"]
            }
        },
        {
            "name": "addSphereAtLocation",
            "description": "Add sphere at named location",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "location": {"type": "string"},
                    "radius": {"type": "number"},
                    "height": {"type": "number"},
                    "color": {"type": "string"},
                    "name": {"type": "string"}
                },
                "required": ["location", "radius"]
            }
        },
        {
            "name": "addBoxAtLocation",
            "description": "Add box at named location",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "location": {"type": "string"},
                    "dimensions": {"type": "object"},
                    "height": {"type": "number"},
                    "color": {"type": "string"},
                    "name": {"type": "string"}
                },
                "required": ["location", "dimensions"]
            }
        },
        {
            "name": "addCylinderAtLocation",
            "description": "Add cylinder at named location",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "location": {"type": "string"},
                    "topRadius": {"type": "number"},
                    "bottomRadius": {"type": "number"},
                    "cylinderHeight": {"type": "number"},
                    "height": {"type": "number"},
                    "color": {"type": "string"},
                    "name": {"type": "string"}
                },
                "required": ["location"]
            }
        },
        {
            "name": "addPointAtLocation",
            "description": "Add point at named location",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "location": {"type": "string"},
                    "color": {"type": "string"},
                    "name": {"type": "string"}
                },
                "required": ["location"]
            }
        },
        {
            "name": "addLabelAtLocation",
            "description": "Add label at named location",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "location": {"type": "string"},
                    "text": {"type": "string"},
                    "name": {"type": "string"}
                },
                "required": ["location", "text"]
            }
        }
    ])
});

static DEFINITIONS: Lazy<String> = Lazy::new(|| CATALOG.to_string());

/// The tool catalog as a JSON value.
pub fn catalog() -> &'static Value {
    &CATALOG
}

/// The tool catalog as compact JSON array text.
pub fn definitions_json() -> &'static str {
    DEFINITIONS.as_str()
}

/// Names of every advertised tool, in catalog order.
pub fn tool_names() -> Vec<&'static str> {
    CATALOG
        .as_array()
        .map(|tools| tools.iter().filter_map(|t| t["name"].as_str()).collect())
        .unwrap_or_default()
}

/// Execute a `tools/call` request and return the tool-result JSON.
///
/// `params` is the request's `params` object text.
pub fn call(params: &str) -> crate::Result<String> {
    let name = json::get_string(params, "name")
        .ok_or_else(|| Error::invalid_params("Missing tool name"))?;
    let args = json::get_object(params, "arguments");

    info!(tool = name, "tools/call");

    let text = match name {
        "resolveLocation" => ResolveLocationTool::execute(args.unwrap_or("{}")),
        "listLocations" => ListLocationsTool::execute(args.unwrap_or("{}"))?,
        _ => match PlacementTool::from_tool_name(name) {
            Some(tool) => PlaceAtLocationTool::execute(tool, args.unwrap_or("{}"))?,
            None => DirectTool::execute(name, args.unwrap_or("{}")),
        },
    };

    Ok(json::tool_result(&text, false))
}

/// Resolve a place name to coordinates
pub struct ResolveLocationTool;

impl ResolveLocationTool {
    pub fn execute(args: &str) -> String {
        let Some(location) = json::get_string(args, "location").map(json::unescape) else {
            return missing_location();
        };

        match gazetteer::resolve(&location) {
            Some(at) => format!(
                "Location '{}' resolved to: longitude={:.6}, latitude={:.6}",
                location, at.longitude, at.latitude
            ),
            None => with_suggestions(
                format!("Location '{}' not found in database", location),
                &location,
            ),
        }
    }
}

/// List gazetteer entries, optionally filtered by prefix and capped
pub struct ListLocationsTool;

impl ListLocationsTool {
    pub fn execute(args: &str) -> crate::Result<String> {
        let prefix = json::get_string(args, "prefix")
            .map(json::unescape)
            .unwrap_or_default();
        // A negative limit is treated as absent.
        let limit = json::get_int(args, "limit")
            .and_then(|limit| usize::try_from(limit).ok())
            .unwrap_or(usize::MAX);

        let matches = gazetteer::search(&prefix, limit);
        debug!(prefix = %prefix, count = matches.len(), "listLocations");
        Ok(gazetteer::to_json(matches)?)
    }
}

/// Resolve a place and emit the scene command for a placement tool
pub struct PlaceAtLocationTool;

impl PlaceAtLocationTool {
    pub fn execute(tool: PlacementTool, args: &str) -> crate::Result<String> {
        let Some(location) = json::get_string(args, "location").map(json::unescape) else {
            return Ok(missing_location());
        };

        let Some(at) = gazetteer::resolve(&location) else {
            return Ok(with_suggestions(
                format!("Location '{}' not found", location),
                &location,
            ));
        };

        match tool.build(at, &location, args) {
            Ok(command) => {
                debug!(tool = tool.tool_name(), kind = command.kind(), "scene command");
                Ok(command.to_json()?)
            }
            Err(err @ cesium_mcp_lib::Error::MissingArgument { .. }) => Ok(err.to_string()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Acknowledge a tool the front end executes itself
pub struct DirectTool;

impl DirectTool {
    pub fn execute(name: &str, args: &str) -> String {
        format!("Tool '{}' executed with args: {}", name, args)
    }
}

fn missing_location() -> String {
    cesium_mcp_lib::Error::MissingArgument { name: "location" }.to_string()
}

fn with_suggestions(message: String, query: &str) -> String {
    let suggestions = gazetteer::suggest(query, MAX_SUGGESTIONS);
    if suggestions.is_empty() {
        message
    } else {
        format!("{}. Did you mean: {}?", message, suggestions.join(", "))
    }
}
