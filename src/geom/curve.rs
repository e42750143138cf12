use serde::{Deserialize, Serialize};

use super::core::Point2;
use super::knots::KnotVector;

#[derive(Debug, thiserror::Error)]
pub enum CurveError {
    #[error("curve requires at least {min} control points, got {got}")]
    InsufficientControlPoints { min: usize, got: usize },
    #[error("spline degree must be >= 1")]
    InvalidDegree,
    #[error("knot vector length must be {expected}, got {got}")]
    KnotCountMismatch { expected: usize, got: usize },
    #[error("knot vector must be non-decreasing")]
    KnotsNotSorted,
}

/// A 2D control point with a homogeneous weight.
///
/// The weight participates only in the rational Bézier basis; the B-spline
/// evaluator works on bare positions. A missing weight deserializes to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_weight")]
    pub w: f64,
}

const fn default_weight() -> f64 {
    1.0
}

impl ControlPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64) -> Self {
        Self { x, y, w }
    }

    /// Control point with the default weight of 1.
    #[must_use]
    pub const fn unweighted(x: f64, y: f64) -> Self {
        Self::new(x, y, 1.0)
    }

    #[must_use]
    pub const fn position(self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

pub trait Curve2 {
    fn point_at(&self, t: f64) -> Point2;

    #[must_use]
    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rational Bézier
// ─────────────────────────────────────────────────────────────────────────────

/// Rational Bézier curve over weighted 2D control points, evaluated with the
/// de Casteljau algorithm in homogeneous coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RationalBezier2 {
    control_points: Vec<ControlPoint>,
}

impl RationalBezier2 {
    /// # Errors
    /// `CurveError::InsufficientControlPoints` when `control_points` is empty.
    pub fn new(control_points: Vec<ControlPoint>) -> Result<Self, CurveError> {
        if control_points.is_empty() {
            return Err(CurveError::InsufficientControlPoints { min: 1, got: 0 });
        }
        Ok(Self { control_points })
    }

    #[must_use]
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }
}

impl Curve2 for RationalBezier2 {
    /// Evaluate at `t` (clamped to `[0, 1]`).
    ///
    /// Every interpolation pass runs on the lifted triples `(x·w, y·w, w)`;
    /// the projection to 2D happens once, after the final pass. Interpolating
    /// pre-divided coordinates and weights separately would not trace the
    /// rational curve. A weight reaching zero during reduction yields a
    /// non-finite result rather than an error.
    fn point_at(&self, t: f64) -> Point2 {
        let t = t.clamp(0.0, 1.0);

        let mut d: Vec<HPoint3> = self
            .control_points
            .iter()
            .map(|cp| HPoint3::lift(*cp))
            .collect();

        let n = d.len();
        for r in 1..n {
            for i in 0..n - r {
                d[i] = d[i].lerp(d[i + 1], t);
            }
        }

        d[0].project()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// B-spline
// ─────────────────────────────────────────────────────────────────────────────

/// B-spline curve over unweighted 2D control points, evaluated with de Boor's
/// algorithm on a clamped knot vector.
#[derive(Debug, Clone, PartialEq)]
pub struct BSpline2 {
    degree: usize,
    control_points: Vec<Point2>,
    knots: KnotVector,
}

impl BSpline2 {
    /// Build a B-spline on the clamped uniform knot vector for the given
    /// degree.
    ///
    /// # Errors
    /// `CurveError::InvalidDegree` when `degree == 0`;
    /// `CurveError::InsufficientControlPoints` when
    /// `control_points.len() < degree + 1`.
    pub fn new(control_points: Vec<Point2>, degree: usize) -> Result<Self, CurveError> {
        let knots = KnotVector::clamped_uniform(control_points.len(), degree)?;
        Ok(Self {
            degree,
            control_points,
            knots,
        })
    }

    /// Build a B-spline on an externally supplied knot vector.
    ///
    /// # Errors
    /// `CurveError::InsufficientControlPoints` when
    /// `control_points.len() < degree + 1`, plus the shape errors reported by
    /// [`KnotVector::from_values`] via `knots`.
    pub fn with_knots(
        control_points: Vec<Point2>,
        degree: usize,
        knots: KnotVector,
    ) -> Result<Self, CurveError> {
        if degree == 0 {
            return Err(CurveError::InvalidDegree);
        }
        if control_points.len() < degree + 1 {
            return Err(CurveError::InsufficientControlPoints {
                min: degree + 1,
                got: control_points.len(),
            });
        }
        if knots.point_count() != control_points.len() || knots.degree() != degree {
            return Err(CurveError::KnotCountMismatch {
                expected: control_points.len() + degree + 1,
                got: knots.len(),
            });
        }
        Ok(Self {
            degree,
            control_points,
            knots,
        })
    }

    #[must_use]
    pub const fn degree(&self) -> usize {
        self.degree
    }

    #[must_use]
    pub fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    #[must_use]
    pub const fn knots(&self) -> &KnotVector {
        &self.knots
    }
}

impl Curve2 for BSpline2 {
    /// Evaluate at `t` (clamped into the knot domain).
    ///
    /// Seeds the working buffer with the `degree + 1` locally relevant
    /// control points and blends them in place. A zero-width knot span
    /// (repeated knot) contributes `alpha = 0`; the curve degenerates there
    /// but stays defined.
    fn point_at(&self, t: f64) -> Point2 {
        let p = self.degree;
        let (a, b) = self.knots.domain();
        let t = t.clamp(a, b);

        let k = self.knots.find_span(t);
        let knots = self.knots.as_slice();

        let mut d: Vec<Point2> = (0..=p).map(|j| self.control_points[k - p + j]).collect();

        for r in 1..=p {
            for j in (r..=p).rev() {
                let i = k - p + j;
                let denom = knots[i + p - r + 1] - knots[i];
                let alpha = if denom == 0.0 {
                    0.0
                } else {
                    (t - knots[i]) / denom
                };
                d[j] = d[j - 1].lerp(d[j], alpha);
            }
        }

        d[p]
    }

    fn domain(&self) -> (f64, f64) {
        self.knots.domain()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile sampling
// ─────────────────────────────────────────────────────────────────────────────

/// Sample a curve at `subdivisions + 1` equally spaced parameters over its
/// domain, inclusive of both endpoints.
///
/// `subdivisions` is clamped to at least 1. No adaptive refinement and no
/// deduplication of coincident samples; the returned polyline replaces any
/// previous one wholesale.
#[must_use]
pub fn sample_curve_uniform(curve: &impl Curve2, subdivisions: usize) -> Vec<Point2> {
    let subdivisions = subdivisions.max(1);
    let (a, b) = curve.domain();

    (0..=subdivisions)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = a + (b - a) * (i as f64 / subdivisions as f64);
            curve.point_at(t)
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Homogeneous helpers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
struct HPoint3 {
    x: f64,
    y: f64,
    w: f64,
}

impl HPoint3 {
    const fn lift(cp: ControlPoint) -> Self {
        Self {
            x: cp.x * cp.w,
            y: cp.y * cp.w,
            w: cp.w,
        }
    }

    fn lerp(self, rhs: Self, t: f64) -> Self {
        let s = 1.0 - t;
        Self {
            x: self.x * s + rhs.x * t,
            y: self.y * s + rhs.y * t,
            w: self.w * s + rhs.w * t,
        }
    }

    const fn project(self) -> Point2 {
        Point2::new(self.x / self.w, self.y / self.w)
    }
}
