#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod engine;
pub mod export;
pub mod geom;

pub use config::{Config, ConfigError, CurveBasis};
pub use engine::{EngineError, build_mesh, evaluate_profile, snapshot};
pub use export::{ExportError, SceneDocument, export_json, export_obj, export_stl, parse_obj};
pub use geom::{
    BSpline2, ControlPoint, Curve2, CurveError, KnotVector, Point2, Point3, RationalBezier2,
    RevolveAxis, RevolveError, RevolveMesh, Tolerance, Vec3, revolve_profile,
    sample_curve_uniform,
};
