//! Coverage engine
//!
//! Two independent rules for detectors rated by spacing:
//!
//! - **Quantity**: `ceil(room area / spacing²)`, a coverage-area lower bound.
//! - **Grid**: one detector at the center of each `spacing`-sized cell,
//!   columns along the length and rows along the width. Centers that fall
//!   past the far walls are discarded, never clamped.
//!
//! The two counts diverge whenever a room dimension is not a multiple of the
//! spacing (a 10 m x 10 m room at 9.1 m needs 2 detectors but the grid
//! places 1). Both rules are kept as they are; neither is derived from the
//! other.
//!
//! This is a simplified square-coverage rule, not a compliance check.

use crate::domain::value_objects::{CoverageError, DetectorPosition, RoomGeometry, Spacing};

/// Required detector count for a room of `room_length` x `room_width` meters.
///
/// Fails with `InvalidGeometry` for non-positive or non-finite room
/// dimensions, and with `InvalidSpacing` for a non-positive or non-finite
/// spacing. Room dimensions are checked first.
pub fn compute_required_quantity(
    room_length: f64,
    room_width: f64,
    spacing: f64,
) -> Result<u64, CoverageError> {
    let room = RoomGeometry::new(room_length, room_width)?;
    let spacing = Spacing::new(spacing)?;
    Ok(required_quantity(&room, spacing))
}

/// Grid of detector centers for a room, columns outer and rows inner.
///
/// Same preconditions and failures as [`compute_required_quantity`].
pub fn generate_grid(
    room_length: f64,
    room_width: f64,
    spacing: f64,
) -> Result<Vec<DetectorPosition>, CoverageError> {
    let room = RoomGeometry::new(room_length, room_width)?;
    let spacing = Spacing::new(spacing)?;
    Ok(grid_positions(&room, spacing))
}

/// Quantity rule on already-validated inputs. Always at least 1.
pub fn required_quantity(room: &RoomGeometry, spacing: Spacing) -> u64 {
    let ratio = room.area() / spacing.cell_area();
    // f64 -> u64 saturates; a ratio that underflows to 0 still needs one unit
    (ratio.ceil() as u64).max(1)
}

/// Grid rule on already-validated inputs.
pub fn grid_positions(room: &RoomGeometry, spacing: Spacing) -> Vec<DetectorPosition> {
    let dims = GridDimensions::of(room, spacing);
    let step = spacing.meters();

    (0..dims.columns)
        .flat_map(|i| {
            (0..dims.rows).map(move |j| {
                DetectorPosition::new((i as f64 + 0.5) * step, (j as f64 + 0.5) * step)
            })
        })
        .filter(|candidate| room.contains(candidate))
        .collect()
}

/// Column and row counts of the coverage grid before boundary filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub columns: usize,
    pub rows: usize,
}

impl GridDimensions {
    pub fn of(room: &RoomGeometry, spacing: Spacing) -> Self {
        Self {
            columns: spacing.cells_along(room.length()),
            rows: spacing.cells_along(room.width()),
        }
    }

    /// Upper bound on the number of grid positions.
    pub fn candidate_count(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }
}
