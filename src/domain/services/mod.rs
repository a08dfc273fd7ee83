//! Domain Services
//!
//! Stateless services that implement the sizing rules.
//!
//! - `coverage` - required quantity and grid placement for square-cell detectors

pub mod coverage;

pub use coverage::{
    compute_required_quantity, generate_grid, grid_positions, required_quantity, GridDimensions,
};
pub use crate::domain::value_objects::CoverageError;
