mod core;
mod curve;
mod knots;
mod mesh;
mod revolve;

pub use self::core::{Point2, Point3, Tolerance, Vec3};
pub use curve::{
    BSpline2, ControlPoint, Curve2, CurveError, RationalBezier2, sample_curve_uniform,
};
pub use knots::KnotVector;
pub use mesh::RevolveMesh;
pub use revolve::{RevolveAxis, RevolveError, revolve_profile, rotate_about_axis};

#[cfg(test)]
mod tests;
