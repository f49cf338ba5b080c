//! MCP resource implementations
//!
//! Four read-only resources are exposed:
//! - cesium://scene/state: scene mode snapshot
//! - cesium://entities: entity list snapshot
//! - cesium://camera: camera position snapshot
//! - cesium://locations: names known to the gazetteer
//!
//! The front end owns the live scene, so the first three answer with fixed
//! placeholder snapshots.

use cesium_mcp_lib::gazetteer;
use cesium_mcp_lib::json;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::{Error, Result};

const MIME_TYPE: &str = "application/json";

/// Descriptor returned by `resources/list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceDescriptor {
    pub uri: &'static str,
    pub name: &'static str,
    #[serde(rename = "mimeType")]
    pub mime_type: &'static str,
}

pub const RESOURCES: [ResourceDescriptor; 4] = [
    ResourceDescriptor {
        uri: SceneStateResource::URI,
        name: "Scene State",
        mime_type: MIME_TYPE,
    },
    ResourceDescriptor {
        uri: EntitiesResource::URI,
        name: "Entity List",
        mime_type: MIME_TYPE,
    },
    ResourceDescriptor {
        uri: CameraResource::URI,
        name: "Camera State",
        mime_type: MIME_TYPE,
    },
    ResourceDescriptor {
        uri: LocationsResource::URI,
        name: "Known Locations",
        mime_type: MIME_TYPE,
    },
];

/// Scene mode snapshot
pub struct SceneStateResource;

impl SceneStateResource {
    pub const URI: &'static str = "cesium://scene/state";

    pub fn read() -> Result<String> {
        Ok(json!({ "mode": "3D" }).to_string())
    }
}

/// Entity list snapshot
pub struct EntitiesResource;

impl EntitiesResource {
    pub const URI: &'static str = "cesium://entities";

    pub fn read() -> Result<String> {
        Ok(json!([]).to_string())
    }
}

/// Camera position snapshot
pub struct CameraResource;

impl CameraResource {
    pub const URI: &'static str = "cesium://camera";

    pub fn read() -> Result<String> {
        Ok(json!({ "longitude": 0, "latitude": 0, "height": 10_000_000 }).to_string())
    }
}

/// Every gazetteer name, in table order
pub struct LocationsResource;

impl LocationsResource {
    pub const URI: &'static str = "cesium://locations";

    pub fn read() -> Result<String> {
        Ok(gazetteer::names_json(gazetteer::list_all())?)
    }
}

/// `resources/list` result: `{"resources":[...]}`
pub fn list_json() -> Result<String> {
    serde_json::to_string(&json!({ "resources": RESOURCES }))
        .map_err(|e| Error::internal(e.to_string()))
}

/// `resources/read` result for the `uri` named in `params`
pub fn read(params: &str) -> Result<String> {
    let uri = json::get_string(params, "uri").ok_or_else(|| Error::invalid_params("Missing uri"))?;
    debug!(uri, "resources/read");

    let text = match uri {
        SceneStateResource::URI => SceneStateResource::read()?,
        EntitiesResource::URI => EntitiesResource::read()?,
        CameraResource::URI => CameraResource::read()?,
        LocationsResource::URI => LocationsResource::read()?,
        _ => return Err(Error::invalid_params("Unknown resource")),
    };

    let payload = json!({
        "contents": [{ "uri": uri, "mimeType": MIME_TYPE, "text": text }]
    });
    serde_json::to_string(&payload).map_err(|e| Error::internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use serde_json::Value;

    fn read_text(uri: &str) -> String {
        let value: Value = serde_json::from_str(&read(&format!(r#"{{"uri":"{}"}}"#, uri)).unwrap())
            .unwrap();
        assert_eq!(value["contents"][0]["uri"], uri);
        assert_eq!(value["contents"][0]["mimeType"], "application/json");
        value["contents"][0]["text"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_list_has_four_resources() {
        let value: Value = serde_json::from_str(&list_json().unwrap()).unwrap();
        let resources = value["resources"].as_array().unwrap();
        assert_eq!(resources.len(), 4);
        assert_eq!(resources[0]["uri"], "cesium://scene/state");
        assert_eq!(resources[0]["name"], "Scene State");
        assert_eq!(resources[3]["mimeType"], "application/json");
    }

    #[test]
    fn test_placeholder_snapshots() {
        assert_eq!(read_text("cesium://scene/state"), r#"{"mode":"3D"}"#);
        assert_eq!(read_text("cesium://entities"), "[]");
        let camera: Value = serde_json::from_str(&read_text("cesium://camera")).unwrap();
        assert_eq!(camera["height"], 10_000_000);
    }

    #[test]
    fn test_locations_resource_lists_names() {
        let names: Value = serde_json::from_str(&read_text("cesium://locations")).unwrap();
        let names = names.as_array().unwrap();
        assert_eq!(names.len(), gazetteer::count());
        assert_eq!(names[0], "new york");
    }

    #[test]
    fn test_read_errors() {
        let err = read("{}").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParams);
        assert_eq!(err.message, "Missing uri");

        let err = read(r#"{"uri":"cesium://nowhere"}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParams);
        assert_eq!(err.message, "Unknown resource");
    }
}
