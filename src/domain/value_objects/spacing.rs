//! Rated spacing value object

use super::room::is_positive_finite;
use super::CoverageError;

/// Validated center-to-center detector spacing in meters.
///
/// The square cell area `spacing * spacing` is also finite and non-zero, so
/// dividing by it never yields infinity from the divisor side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing(f64);

impl Spacing {
    pub fn new(meters: f64) -> Result<Self, CoverageError> {
        if !is_positive_finite(meters) || !is_positive_finite(meters * meters) {
            return Err(CoverageError::InvalidSpacing { spacing: meters });
        }
        Ok(Self(meters))
    }

    pub fn meters(&self) -> f64 {
        self.0
    }

    /// Area of one square coverage cell.
    pub fn cell_area(&self) -> f64 {
        self.0 * self.0
    }

    /// Number of cells needed to span `extent` meters.
    pub fn cells_along(&self, extent: f64) -> usize {
        (extent / self.0).ceil() as usize
    }
}

impl std::fmt::Display for Spacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} m", self.0)
    }
}
