//! firelayout - fire detection sizing and layout
//!
//! Given a room and a selection of catalog devices, firelayout computes how
//! many spacing-rated detectors the room needs, places them on a coverage
//! grid, and exports a bill of quantities (CSV) and a plan drawing (DXF).
//!
//! The sizing rule is a simplified square-coverage model. It is an
//! engineering aid, not an authority on code compliance.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{DesignOptions, DesignResult, DesignUseCase, DeviceSelection};
pub use config::Config;
pub use domain::entities::{Catalog, DeviceSpec, SelectionEntry, SelectionLedger, SizingMetric};
pub use domain::services::{compute_required_quantity, generate_grid};
pub use domain::value_objects::{CoverageError, DetectorPosition, RoomGeometry, Spacing};
pub use error::{LayoutError, LayoutResult};
