//! Typed failures of the coverage engine.

use thiserror::Error;

/// Why a room or spacing was rejected before any computation.
///
/// Non-finite values (NaN, infinity) are rejected alongside non-positive ones.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoverageError {
    /// Room length or width is not a finite value greater than zero
    #[error("invalid room geometry {length} m x {width} m - both dimensions must be finite and greater than zero")]
    InvalidGeometry { length: f64, width: f64 },

    /// Rated spacing is not a finite value greater than zero
    #[error("invalid rated spacing {spacing} m - spacing must be finite and greater than zero")]
    InvalidSpacing { spacing: f64 },
}

impl CoverageError {
    pub fn is_geometry(&self) -> bool {
        matches!(self, CoverageError::InvalidGeometry { .. })
    }

    pub fn is_spacing(&self) -> bool {
        matches!(self, CoverageError::InvalidSpacing { .. })
    }
}
