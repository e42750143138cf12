//! ASCII STL export.
//!
//! ```text
//! solid revolution
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid revolution
//! ```
//!
//! Each quad is split along the fixed `(v0, v2)` diagonal into the triangles
//! `(v0, v1, v2)` and `(v0, v2, v3)`. Facet normals come from the normalized
//! cross product of the first two edges in winding order; degenerate
//! triangles (zero-radius rows on the axis) get a zero normal.

use std::fmt::Write as _;

use crate::geom::{Point3, RevolveMesh, Vec3};

/// Serialize a mesh to ASCII STL text.
#[must_use]
pub fn export_stl(mesh: &RevolveMesh) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "solid revolution");

    for q in &mesh.quads {
        let v0 = Point3::from_array(mesh.positions[q[0] as usize]);
        let v1 = Point3::from_array(mesh.positions[q[1] as usize]);
        let v2 = Point3::from_array(mesh.positions[q[2] as usize]);
        let v3 = Point3::from_array(mesh.positions[q[3] as usize]);

        write_facet(&mut out, v0, v1, v2);
        write_facet(&mut out, v0, v2, v3);
    }

    let _ = writeln!(out, "endsolid revolution");
    out
}

fn write_facet(out: &mut String, v0: Point3, v1: Point3, v2: Point3) {
    let e1 = v1 - v0;
    let e2 = v2 - v0;
    let normal = e1.cross(e2).normalized().unwrap_or(Vec3::ZERO);

    let _ = writeln!(
        out,
        "  facet normal {:.6e} {:.6e} {:.6e}",
        normal.x, normal.y, normal.z
    );
    let _ = writeln!(out, "    outer loop");
    for v in [v0, v1, v2] {
        let _ = writeln!(out, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z);
    }
    let _ = writeln!(out, "    endloop");
    let _ = writeln!(out, "  endfacet");
}
