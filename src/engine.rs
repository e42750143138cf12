//! Pipeline operations tying the curve evaluators, the profile sampler, and
//! the revolution builder together.
//!
//! Every operation is pure and synchronous: it maps (control points, config)
//! to a freshly computed value with no caching and no shared state. Change
//! detection and invocation timing belong to the caller.

use log::debug;

use crate::config::{Config, ConfigError, CurveBasis};
use crate::export::SceneDocument;
use crate::geom::{
    BSpline2, ControlPoint, CurveError, Point2, RationalBezier2, RevolveError, RevolveMesh,
    revolve_profile, sample_curve_uniform,
};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error(transparent)]
    Revolve(#[from] RevolveError),
}

/// Evaluate the configured curve over the control points and sample it into
/// an ordered profile polyline of `profile_subdivisions + 1` points.
///
/// The Bézier basis consumes the control-point weights; the B-spline basis
/// drops them and works on bare positions.
///
/// # Errors
/// Configuration bounds via [`ConfigError`], curve construction via
/// [`CurveError`].
pub fn evaluate_profile(
    control_points: &[ControlPoint],
    config: &Config,
) -> Result<Vec<Point2>, EngineError> {
    config.validate()?;

    let profile = match config.basis {
        CurveBasis::Bezier => {
            let curve = RationalBezier2::new(control_points.to_vec())?;
            sample_curve_uniform(&curve, config.profile_subdivisions)
        }
        CurveBasis::BSpline => {
            let positions: Vec<Point2> =
                control_points.iter().map(|cp| cp.position()).collect();
            let curve = BSpline2::new(positions, config.degree)?;
            sample_curve_uniform(&curve, config.profile_subdivisions)
        }
    };

    debug!(
        "sampled {} profile points from {} control points ({:?} basis)",
        profile.len(),
        control_points.len(),
        config.basis
    );
    Ok(profile)
}

/// Run the full pipeline: evaluate the profile, then sweep it into a
/// surface-of-revolution mesh.
///
/// # Errors
/// Everything [`evaluate_profile`] reports, plus revolution bounds via
/// [`RevolveError`].
pub fn build_mesh(
    control_points: &[ControlPoint],
    config: &Config,
) -> Result<RevolveMesh, EngineError> {
    let profile = evaluate_profile(control_points, config)?;
    let mesh = revolve_profile(
        &profile,
        config.axis,
        config.angle_radians(),
        config.angular_divisions,
    )?;

    debug!(
        "revolved {} profile points into {} vertices / {} faces",
        profile.len(),
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}

/// Capture the full generating state plus the derived mesh as a
/// [`SceneDocument`], ready for the JSON exporter.
///
/// # Errors
/// Everything [`build_mesh`] reports.
pub fn snapshot(
    control_points: &[ControlPoint],
    config: &Config,
) -> Result<SceneDocument, EngineError> {
    let mesh = build_mesh(control_points, config)?;
    Ok(SceneDocument {
        control_points: control_points.to_vec(),
        parameters: *config,
        geometry: mesh,
    })
}
