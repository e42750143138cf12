use serde::{Deserialize, Serialize};

use crate::geom::RevolveAxis;

/// Curve basis used to evaluate the profile polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveBasis {
    Bezier,
    BSpline,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("degree must be >= 1")]
    InvalidDegree,
    #[error("angle must be within (0, 360] degrees")]
    InvalidAngle,
    #[error("angular divisions must be >= {min}")]
    InvalidAngularDivisions { min: usize },
    #[error("profile subdivisions must be >= 1")]
    InvalidSubdivisions,
}

/// Per-call evaluation configuration.
///
/// Callers pass a `Config` value into every pipeline operation; the engine
/// keeps no ambient configuration and recomputes every derived value from
/// scratch. `angle` is in degrees, matching the editing surface; it is
/// converted to radians at the revolution boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub basis: CurveBasis,
    /// B-spline degree; ignored by the Bézier basis, whose degree is fixed
    /// by the control-point count.
    pub degree: usize,
    pub axis: RevolveAxis,
    /// Total angular sweep in degrees, `(0, 360]`.
    pub angle: f64,
    pub angular_divisions: usize,
    pub profile_subdivisions: usize,
}

impl Config {
    /// # Errors
    /// The first violated parameter bound, as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.degree < 1 {
            return Err(ConfigError::InvalidDegree);
        }
        if !self.angle.is_finite() || self.angle <= 0.0 || self.angle > 360.0 {
            return Err(ConfigError::InvalidAngle);
        }
        if self.angular_divisions < 3 {
            return Err(ConfigError::InvalidAngularDivisions { min: 3 });
        }
        if self.profile_subdivisions < 1 {
            return Err(ConfigError::InvalidSubdivisions);
        }
        Ok(())
    }

    /// Angular sweep in radians.
    #[must_use]
    pub fn angle_radians(&self) -> f64 {
        self.angle.to_radians()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            basis: CurveBasis::Bezier,
            degree: 3,
            axis: RevolveAxis::Y,
            angle: 360.0,
            angular_divisions: 32,
            profile_subdivisions: 50,
        }
    }
}
