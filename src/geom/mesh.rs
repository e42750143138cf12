use serde::{Deserialize, Serialize};

/// An indexed surface-of-revolution mesh.
///
/// Vertices are emitted ring-major (one ring per angular step, profile points
/// in order within each ring); faces are quads joining consecutive rings.
/// Coincident vertices are never deduplicated, so a full 360° sweep carries a
/// closing ring on top of ring 0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RevolveMesh {
    #[serde(rename = "vertices")]
    pub positions: Vec<[f64; 3]>,
    #[serde(rename = "faces")]
    pub quads: Vec<[u32; 4]>,
}

impl RevolveMesh {
    #[must_use]
    pub fn new(positions: Vec<[f64; 3]>, quads: Vec<[u32; 4]>) -> Self {
        Self { positions, quads }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.quads.len()
    }

    /// Returns true if any vertex position contains NaN or Inf values.
    #[must_use]
    pub fn has_invalid_vertices(&self) -> bool {
        self.positions
            .iter()
            .any(|p| !p[0].is_finite() || !p[1].is_finite() || !p[2].is_finite())
    }

    /// Returns true if all face indices are within bounds.
    #[must_use]
    pub fn has_valid_indices(&self) -> bool {
        let n = u32::try_from(self.positions.len()).unwrap_or(u32::MAX);
        self.quads.iter().all(|q| q.iter().all(|&i| i < n))
    }

    /// Structural sanity check for tests and debug assertions. Out-of-range
    /// indices are programmer errors, not recoverable conditions.
    ///
    /// # Errors
    /// A human-readable description of the first violated invariant.
    pub fn validate(&self) -> Result<(), String> {
        if self.has_invalid_vertices() {
            return Err("mesh has invalid vertex coordinates (NaN/Inf)".to_string());
        }
        if !self.has_valid_indices() {
            return Err("mesh has out-of-bounds vertex indices".to_string());
        }
        Ok(())
    }
}
