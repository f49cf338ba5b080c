//! Scene commands emitted for the globe front end.
//!
//! Each placement tool turns resolved coordinates plus the raw `arguments`
//! object of a tool call into one [`SceneCommand`]. Optional arguments fall
//! back to per-tool defaults. Values are only checked for "parses as a
//! number"; ranges are the front end's business, so a negative radius is
//! passed through as given.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::gazetteer::Coordinates;
use crate::json;

pub const DEFAULT_FLY_HEIGHT: f64 = 10_000.0;
pub const DEFAULT_FLY_DURATION: f64 = 2.0;
pub const DEFAULT_SPHERE_RADIUS: f64 = 1_000.0;
pub const DEFAULT_BOX_EDGE: f64 = 1_000.0;
pub const DEFAULT_CYLINDER_RADIUS: f64 = 1_000.0;
pub const DEFAULT_CYLINDER_LENGTH: f64 = 1_000.0;
pub const DEFAULT_HEIGHT: f64 = 0.0;

/// Box extents in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            x: DEFAULT_BOX_EDGE,
            y: DEFAULT_BOX_EDGE,
            z: DEFAULT_BOX_EDGE,
        }
    }
}

/// A `type`-discriminated command the front end interprets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SceneCommand {
    FlyTo {
        longitude: f64,
        latitude: f64,
        height: f64,
        duration: f64,
    },
    AddSphere {
        longitude: f64,
        latitude: f64,
        height: f64,
        radius: f64,
        color: String,
        name: String,
    },
    AddBox {
        longitude: f64,
        latitude: f64,
        height: f64,
        dimensions: Dimensions,
        color: String,
        name: String,
    },
    AddCylinder {
        longitude: f64,
        latitude: f64,
        height: f64,
        top_radius: f64,
        bottom_radius: f64,
        cylinder_height: f64,
        color: String,
        name: String,
    },
    AddPoint {
        longitude: f64,
        latitude: f64,
        color: String,
        name: String,
    },
    AddLabel {
        longitude: f64,
        latitude: f64,
        text: String,
        name: String,
    },
}

impl SceneCommand {
    /// The `type` discriminator as written on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            SceneCommand::FlyTo { .. } => "flyTo",
            SceneCommand::AddSphere { .. } => "addSphere",
            SceneCommand::AddBox { .. } => "addBox",
            SceneCommand::AddCylinder { .. } => "addCylinder",
            SceneCommand::AddPoint { .. } => "addPoint",
            SceneCommand::AddLabel { .. } => "addLabel",
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::serialize("scene command", e))
    }
}

/// Tools that place something at a named location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementTool {
    FlyTo,
    Sphere,
    Box,
    Cylinder,
    Point,
    Label,
}

impl PlacementTool {
    pub const ALL: [PlacementTool; 6] = [
        PlacementTool::FlyTo,
        PlacementTool::Sphere,
        PlacementTool::Box,
        PlacementTool::Cylinder,
        PlacementTool::Point,
        PlacementTool::Label,
    ];

    /// Map an MCP tool name (case-sensitive) to its placement tool.
    pub fn from_tool_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.tool_name() == name)
    }

    pub fn tool_name(self) -> &'static str {
        match self {
            PlacementTool::FlyTo => "flyToLocation",
            PlacementTool::Sphere => "addSphereAtLocation",
            PlacementTool::Box => "addBoxAtLocation",
            PlacementTool::Cylinder => "addCylinderAtLocation",
            PlacementTool::Point => "addPointAtLocation",
            PlacementTool::Label => "addLabelAtLocation",
        }
    }

    /// Build the command for this tool.
    ///
    /// `place` is the location text the caller asked for; it names the
    /// entity when the arguments carry no explicit `name`.
    pub fn build(self, at: Coordinates, place: &str, args: &str) -> Result<SceneCommand> {
        let Coordinates {
            longitude,
            latitude,
        } = at;

        let command = match self {
            PlacementTool::FlyTo => SceneCommand::FlyTo {
                longitude,
                latitude,
                height: number_or(args, "height", DEFAULT_FLY_HEIGHT),
                duration: number_or(args, "duration", DEFAULT_FLY_DURATION),
            },
            PlacementTool::Sphere => SceneCommand::AddSphere {
                longitude,
                latitude,
                height: number_or(args, "height", DEFAULT_HEIGHT),
                radius: number_or(args, "radius", DEFAULT_SPHERE_RADIUS),
                color: text_or(args, "color", "red"),
                name: entity_name(args, place),
            },
            PlacementTool::Box => SceneCommand::AddBox {
                longitude,
                latitude,
                height: number_or(args, "height", DEFAULT_HEIGHT),
                dimensions: dimensions(args),
                color: text_or(args, "color", "blue"),
                name: entity_name(args, place),
            },
            PlacementTool::Cylinder => SceneCommand::AddCylinder {
                longitude,
                latitude,
                height: number_or(args, "height", DEFAULT_HEIGHT),
                top_radius: number_or(args, "topRadius", DEFAULT_CYLINDER_RADIUS),
                bottom_radius: number_or(args, "bottomRadius", DEFAULT_CYLINDER_RADIUS),
                cylinder_height: number_or(args, "cylinderHeight", DEFAULT_CYLINDER_LENGTH),
                color: text_or(args, "color", "green"),
                name: entity_name(args, place),
            },
            PlacementTool::Point => SceneCommand::AddPoint {
                longitude,
                latitude,
                color: text_or(args, "color", "yellow"),
                name: entity_name(args, place),
            },
            PlacementTool::Label => SceneCommand::AddLabel {
                longitude,
                latitude,
                text: json::get_string(args, "text")
                    .map(json::unescape)
                    .ok_or(Error::MissingArgument { name: "text" })?,
                name: entity_name(args, place),
            },
        };

        Ok(command)
    }
}

fn number_or(args: &str, key: &str, default: f64) -> f64 {
    json::get_number(args, key).unwrap_or(default)
}

fn text_or(args: &str, key: &str, default: &str) -> String {
    json::get_string(args, key)
        .map(json::unescape)
        .unwrap_or_else(|| default.to_string())
}

fn entity_name(args: &str, place: &str) -> String {
    match json::get_string(args, "name") {
        Some(name) if !name.is_empty() => json::unescape(name),
        _ => place.to_string(),
    }
}

fn dimensions(args: &str) -> Dimensions {
    let defaults = Dimensions::default();
    match json::get_object(args, "dimensions") {
        Some(dims) => Dimensions {
            x: number_or(dims, "x", defaults.x),
            y: number_or(dims, "y", defaults.y),
            z: number_or(dims, "z", defaults.z),
        },
        None => defaults,
    }
}
