//! Layout drawing entity

use crate::domain::value_objects::{DetectorPosition, RoomGeometry};

/// Radius of every detector marker, in meters. Purely presentational.
pub const MARKER_RADIUS: f64 = 0.2;

/// Room outline plus detector markers for one export cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDrawing {
    outline: [(f64, f64); 5],
    markers: Vec<DetectorPosition>,
}

impl LayoutDrawing {
    pub fn new(room: &RoomGeometry, markers: Vec<DetectorPosition>) -> Self {
        Self {
            outline: room.outline(),
            markers,
        }
    }

    /// Closed polygon `(0,0) (L,0) (L,W) (0,W) (0,0)`.
    pub fn outline(&self) -> &[(f64, f64); 5] {
        &self.outline
    }

    pub fn markers(&self) -> &[DetectorPosition] {
        &self.markers
    }

    pub fn marker_radius(&self) -> f64 {
        MARKER_RADIUS
    }
}
