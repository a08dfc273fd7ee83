//! Domain Entities
//!
//! - `DeviceSpec` / `Catalog` - read-only equipment reference data
//! - `SelectionLedger` - the mutable worklist of chosen devices
//! - `LayoutDrawing` - room outline plus detector markers, ready for export

mod catalog;
mod device;
mod drawing;
mod ledger;

pub use catalog::{Catalog, Category};
pub use device::{DeviceSpec, SizingMetric};
pub use drawing::{LayoutDrawing, MARKER_RADIUS};
pub use ledger::{CoverageCycle, SelectionEntry, SelectionLedger};
