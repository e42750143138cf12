//! Text exporters for revolution meshes.
//!
//! All exporters are pure text construction over an already-built
//! [`RevolveMesh`](crate::geom::RevolveMesh): no I/O, no vertex
//! deduplication, no normal smoothing. File naming and persistence belong to
//! the caller.

mod json;
mod obj;
mod stl;

pub use json::{SceneDocument, export_json};
pub use obj::{export_obj, parse_obj};
pub use stl::export_stl;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("json round-trip failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("obj parse error: {0}")]
    ObjParse(String),
}
