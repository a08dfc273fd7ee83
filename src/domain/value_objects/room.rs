//! Room geometry value object

use super::{CoverageError, DetectorPosition};

/// Validated rectangular room footprint in meters.
///
/// Both dimensions are finite and strictly positive, and so is the area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomGeometry {
    length: f64,
    width: f64,
}

impl RoomGeometry {
    pub fn new(length: f64, width: f64) -> Result<Self, CoverageError> {
        let valid = is_positive_finite(length)
            && is_positive_finite(width)
            && is_positive_finite(length * width);
        if !valid {
            return Err(CoverageError::InvalidGeometry { length, width });
        }
        Ok(Self { length, width })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// True when the point lies in `[0, length] x [0, width]`, edges included.
    pub fn contains(&self, position: &DetectorPosition) -> bool {
        (0.0..=self.length).contains(&position.x) && (0.0..=self.width).contains(&position.y)
    }

    /// Closed outline, counter-clockwise from the origin, first vertex repeated.
    pub fn outline(&self) -> [(f64, f64); 5] {
        [
            (0.0, 0.0),
            (self.length, 0.0),
            (self.length, self.width),
            (0.0, self.width),
            (0.0, 0.0),
        ]
    }
}

pub(crate) fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_dimensions() {
        let room = RoomGeometry::new(20.0, 10.0).unwrap();
        assert_eq!(room.area(), 200.0);
    }

    #[test]
    fn rejects_zero_and_negative() {
        for (l, w) in [(0.0, 5.0), (5.0, 0.0), (-1.0, 5.0), (5.0, -1.0)] {
            let err = RoomGeometry::new(l, w).unwrap_err();
            assert_eq!(err, CoverageError::InvalidGeometry { length: l, width: w });
        }
    }

    #[test]
    fn rejects_non_finite() {
        assert!(RoomGeometry::new(f64::NAN, 5.0).is_err());
        assert!(RoomGeometry::new(5.0, f64::INFINITY).is_err());
        assert!(RoomGeometry::new(f64::NEG_INFINITY, 5.0).is_err());
    }

    #[test]
    fn rejects_overflowing_area() {
        assert!(RoomGeometry::new(1e200, 1e200).unwrap_err().is_geometry());
    }

    #[test]
    fn contains_includes_edges() {
        let room = RoomGeometry::new(10.0, 10.0).unwrap();
        assert!(room.contains(&DetectorPosition::new(10.0, 10.0)));
        assert!(room.contains(&DetectorPosition::new(0.0, 0.0)));
        assert!(!room.contains(&DetectorPosition::new(13.65, 4.55)));
        assert!(!room.contains(&DetectorPosition::new(4.55, 10.01)));
    }

    #[test]
    fn outline_is_closed() {
        let room = RoomGeometry::new(6.0, 4.0).unwrap();
        let outline = room.outline();
        assert_eq!(outline[0], outline[4]);
        assert_eq!(outline[2], (6.0, 4.0));
    }
}
