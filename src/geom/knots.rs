use std::ops::Index;

use super::curve::CurveError;

/// Clamped knot vector for a B-spline basis.
///
/// The first and last `degree + 1` entries are pinned to 0 and 1, so a curve
/// built on this vector interpolates its first and last control points. The
/// parameter domain is normalized to `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotVector {
    degree: usize,
    values: Vec<f64>,
}

impl KnotVector {
    /// Build the clamped uniform knot vector for `point_count` control points
    /// of the given degree.
    ///
    /// Emits `degree + 1` zeros, `point_count - degree - 1` evenly spaced
    /// interior knots strictly between 0 and 1, then `degree + 1` ones, for a
    /// total length of `point_count + degree + 1`.
    ///
    /// # Errors
    /// `CurveError::InvalidDegree` when `degree == 0`;
    /// `CurveError::InsufficientControlPoints` when `point_count < degree + 1`.
    pub fn clamped_uniform(point_count: usize, degree: usize) -> Result<Self, CurveError> {
        if degree == 0 {
            return Err(CurveError::InvalidDegree);
        }
        if point_count < degree + 1 {
            return Err(CurveError::InsufficientControlPoints {
                min: degree + 1,
                got: point_count,
            });
        }

        let mut values = Vec::with_capacity(point_count + degree + 1);
        for _ in 0..=degree {
            values.push(0.0);
        }

        let interior = point_count - degree;
        if interior > 1 {
            for i in 1..interior {
                #[allow(clippy::cast_precision_loss)]
                values.push(i as f64 / interior as f64);
            }
        }

        for _ in 0..=degree {
            values.push(1.0);
        }

        Ok(Self { degree, values })
    }

    /// Wrap an externally supplied knot vector, validating its shape.
    ///
    /// # Errors
    /// `CurveError::InvalidDegree` when `degree == 0`;
    /// `CurveError::KnotCountMismatch` when the length is not
    /// `point_count + degree + 1`;
    /// `CurveError::KnotsNotSorted` when the sequence decreases anywhere.
    pub fn from_values(
        point_count: usize,
        degree: usize,
        values: Vec<f64>,
    ) -> Result<Self, CurveError> {
        if degree == 0 {
            return Err(CurveError::InvalidDegree);
        }
        let expected = point_count + degree + 1;
        if values.len() != expected {
            return Err(CurveError::KnotCountMismatch {
                expected,
                got: values.len(),
            });
        }
        if !values.windows(2).all(|w| w[0] <= w[1]) {
            return Err(CurveError::KnotsNotSorted);
        }
        Ok(Self { degree, values })
    }

    #[must_use]
    pub const fn degree(&self) -> usize {
        self.degree
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Number of control points this vector supports.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.values.len() - self.degree - 1
    }

    /// Valid parameter domain `[U[p], U[n]]`.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (
            self.values[self.degree],
            self.values[self.values.len() - self.degree - 1],
        )
    }

    /// Locate the knot span `k` with `U[k] <= t < U[k+1]` by binary search.
    ///
    /// `t` at or beyond the end of the domain maps into the last valid span,
    /// so the curve is defined at both endpoints.
    #[must_use]
    pub fn find_span(&self, t: f64) -> usize {
        let p = self.degree;
        let n = self.point_count() - 1;
        let knots = &self.values;

        if t >= knots[n + 1] {
            return n;
        }
        if t <= knots[p] {
            return p;
        }

        let mut low = p;
        let mut high = n + 1;
        let mut mid = (low + high) / 2;
        while t < knots[mid] || t >= knots[mid + 1] {
            if t < knots[mid] {
                high = mid;
            } else {
                low = mid;
            }
            mid = (low + high) / 2;
        }
        mid
    }
}

impl Index<usize> for KnotVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}
