//! Wavefront OBJ export.
//!
//! Emits one `v x y z` line per vertex in emission order and one
//! `f i1 i2 i3 i4` line per quad with 1-based indices. Floats use Rust's
//! shortest round-trip formatting, so re-parsing reproduces positions
//! exactly.

use std::fmt::Write as _;

use super::ExportError;
use crate::geom::RevolveMesh;

/// Serialize a mesh to OBJ text.
#[must_use]
pub fn export_obj(mesh: &RevolveMesh) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# lathe-engine surface of revolution");
    let _ = writeln!(out, "o revolution");

    for p in &mesh.positions {
        let _ = writeln!(out, "v {} {} {}", p[0], p[1], p[2]);
    }

    for q in &mesh.quads {
        let _ = writeln!(
            out,
            "f {} {} {} {}",
            q[0] + 1,
            q[1] + 1,
            q[2] + 1,
            q[3] + 1
        );
    }

    out
}

/// Parse OBJ text produced by [`export_obj`] back into a mesh.
///
/// Only `v` and quad `f` records are consumed; comments, object names, and
/// unknown records are skipped. Face indices are 1-based in the text.
///
/// # Errors
/// `ExportError::ObjParse` on a malformed `v` or `f` record or an index
/// referencing a vertex that was never emitted.
pub fn parse_obj(text: &str) -> Result<RevolveMesh, ExportError> {
    let mut positions: Vec<[f64; 3]> = Vec::new();
    let mut quads: Vec<[u32; 4]> = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("v") => {
                let mut coords = [0.0f64; 3];
                for slot in &mut coords {
                    *slot = fields
                        .next()
                        .and_then(|f| f.parse().ok())
                        .ok_or_else(|| malformed("vertex", line_no))?;
                }
                positions.push(coords);
            }
            Some("f") => {
                let mut indices = [0u32; 4];
                for slot in &mut indices {
                    let index: u32 = fields
                        .next()
                        .and_then(|f| f.split('/').next())
                        .and_then(|f| f.parse().ok())
                        .ok_or_else(|| malformed("face", line_no))?;
                    if index == 0 || index as usize > positions.len() {
                        return Err(ExportError::ObjParse(format!(
                            "face index {index} out of range on line {}",
                            line_no + 1
                        )));
                    }
                    *slot = index - 1;
                }
                quads.push(indices);
            }
            _ => {}
        }
    }

    Ok(RevolveMesh::new(positions, quads))
}

fn malformed(record: &str, line_no: usize) -> ExportError {
    ExportError::ObjParse(format!("malformed {record} record on line {}", line_no + 1))
}
