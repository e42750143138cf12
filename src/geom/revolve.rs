use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::core::{Point2, Point3, Tolerance};
use super::mesh::RevolveMesh;

/// Rotation axis for a surface of revolution.
///
/// The coordinate along the chosen axis is preserved; the remaining two
/// coordinates rotate as a 2D pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevolveAxis {
    X,
    Y,
    Z,
}

#[derive(Debug, thiserror::Error)]
pub enum RevolveError {
    #[error("revolve angle must be within (0, 2\u{3c0}] radians")]
    InvalidAngle,
    #[error("revolve requires at least {min} angular divisions")]
    InvalidAngularDivisions { min: usize },
    #[error("profile requires at least {min} points")]
    NotEnoughPoints { min: usize },
    #[error("profile points must be finite")]
    NonFinitePoint,
}

/// Sweep a 2D profile polyline around an axis into an indexed quad mesh.
///
/// The profile is lifted into the XY plane (`z = 0`) and rotated through
/// `angular_divisions + 1` steps of `angle / angular_divisions` radians.
/// Vertices are emitted ring-major; each pair of adjacent rings and adjacent
/// profile points contributes one quad wound by increasing angle, so faces
/// point consistently outward for a profile traversed with the axis on its
/// left.
///
/// A full 360° sweep emits the closing ring as a separate, world-coincident
/// copy of ring 0 — seam vertices are never welded. Profile points on the
/// rotation axis produce coincident vertices and degenerate quads for that
/// row; they are kept as-is.
///
/// Output satisfies `vertex_count == profile.len() * (angular_divisions + 1)`
/// and `face_count == (profile.len() - 1) * angular_divisions`.
///
/// # Errors
/// `NotEnoughPoints` when the profile has fewer than 2 points;
/// `NonFinitePoint` when any coordinate is NaN or infinite;
/// `InvalidAngle` when `angle` is outside `(0, 2π]`;
/// `InvalidAngularDivisions` when `angular_divisions < 3`.
pub fn revolve_profile(
    profile: &[Point2],
    axis: RevolveAxis,
    angle: f64,
    angular_divisions: usize,
) -> Result<RevolveMesh, RevolveError> {
    let tol = Tolerance::default_geom();

    if profile.len() < 2 {
        return Err(RevolveError::NotEnoughPoints { min: 2 });
    }
    if !profile.iter().all(|p| p.is_finite()) {
        return Err(RevolveError::NonFinitePoint);
    }
    if !angle.is_finite() || angle <= 0.0 || angle > 2.0 * PI + tol.eps {
        return Err(RevolveError::InvalidAngle);
    }
    if angular_divisions < 3 {
        return Err(RevolveError::InvalidAngularDivisions { min: 3 });
    }

    let angle = angle.min(2.0 * PI);
    let n = profile.len();
    let rings = angular_divisions + 1;
    #[allow(clippy::cast_precision_loss)]
    let step = angle / angular_divisions as f64;

    let mut positions: Vec<[f64; 3]> = Vec::with_capacity(n * rings);
    for s in 0..rings {
        #[allow(clippy::cast_precision_loss)]
        let theta = s as f64 * step;
        for point in profile {
            positions.push(rotate_about_axis(point.to_point3(), axis, theta).to_array());
        }
    }

    let mut quads: Vec<[u32; 4]> = Vec::with_capacity((n - 1) * angular_divisions);
    for s in 0..angular_divisions {
        for i in 0..n - 1 {
            #[allow(clippy::cast_possible_truncation)]
            let quad = [
                (s * n + i) as u32,
                ((s + 1) * n + i) as u32,
                ((s + 1) * n + i + 1) as u32,
                (s * n + i + 1) as u32,
            ];
            quads.push(quad);
        }
    }

    Ok(RevolveMesh::new(positions, quads))
}

/// Rotate `p` by `theta` radians about a coordinate axis. The axis coordinate
/// passes through unchanged.
#[must_use]
pub fn rotate_about_axis(p: Point3, axis: RevolveAxis, theta: f64) -> Point3 {
    let (sin, cos) = theta.sin_cos();
    match axis {
        RevolveAxis::X => Point3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos),
        RevolveAxis::Y => Point3::new(p.z * sin + p.x * cos, p.y, p.z * cos - p.x * sin),
        RevolveAxis::Z => Point3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z),
    }
}
