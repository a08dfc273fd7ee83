//! Detector position value object

use serde::Serialize;

/// A detector center point in room-local meters.
///
/// Origin is the room corner `(0, 0)`; `x` runs along the length and `y`
/// along the width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetectorPosition {
    pub x: f64,
    pub y: f64,
}

impl DetectorPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for DetectorPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl From<(f64, f64)> for DetectorPosition {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
