//! Full-state JSON round-trip.
//!
//! Unlike the geometry-only OBJ/STL formats, the JSON document captures the
//! generating state (control points and parameters) alongside the derived
//! mesh, so an editing session can be restored exactly.

use serde::{Deserialize, Serialize};

use super::ExportError;
use crate::config::Config;
use crate::geom::{ControlPoint, RevolveMesh};

/// Complete serializable state of one curve-and-revolution scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    pub control_points: Vec<ControlPoint>,
    pub parameters: Config,
    pub geometry: RevolveMesh,
}

impl SceneDocument {
    /// # Errors
    /// `ExportError::Json` when the text is not a valid document.
    pub fn from_json(text: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Serialize a scene document to pretty-printed JSON text.
///
/// # Errors
/// `ExportError::Json` on serializer failure.
pub fn export_json(document: &SceneDocument) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(document)?)
}
