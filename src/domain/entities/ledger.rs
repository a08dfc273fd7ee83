//! Selection Ledger entity
//!
//! The ordered worklist of chosen devices. Entries copy what they need from
//! the catalog at selection time, so later catalog changes never leak into
//! an existing ledger.

use serde::Serialize;
use tracing::debug;

use crate::domain::services::{grid_positions, required_quantity};
use crate::domain::value_objects::{CoverageError, DetectorPosition, RoomGeometry, Spacing};
use crate::error::LayoutResult;

use super::catalog::Catalog;
use super::device::DeviceSpec;

/// One line of the worklist (becomes one BOQ row).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionEntry {
    name: String,
    reference_tag: String,
    rated_spacing: Option<f64>,
    quantity: u64,
}

impl SelectionEntry {
    fn from_device(device: &DeviceSpec) -> Self {
        Self {
            name: device.name().to_string(),
            reference_tag: device.reference_tag().to_string(),
            rated_spacing: device.rated_spacing(),
            quantity: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reference_tag(&self) -> &str {
        &self.reference_tag
    }

    pub fn rated_spacing(&self) -> Option<f64> {
        self.rated_spacing
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }
}

/// Output of one [`SelectionLedger::compute_and_apply`] cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageCycle {
    positions: Vec<DetectorPosition>,
    placed: Vec<Option<usize>>,
}

impl CoverageCycle {
    /// Combined grid positions of every spacing-bearing entry, in ledger order.
    pub fn positions(&self) -> &[DetectorPosition] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<DetectorPosition> {
        self.positions
    }

    /// Grid positions contributed by entry `index`; `None` for entries without spacing.
    pub fn placed(&self, index: usize) -> Option<usize> {
        self.placed.get(index).copied().flatten()
    }
}

/// Ordered, owned worklist of selections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionLedger {
    entries: Vec<SelectionEntry>,
}

impl SelectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry for `device` with quantity 1.
    ///
    /// Adding the same device twice yields two independent entries.
    pub fn add_entry(&mut self, device: &DeviceSpec) -> &SelectionEntry {
        let index = self.entries.len();
        self.entries.push(SelectionEntry::from_device(device));
        &self.entries[index]
    }

    /// Look `query` up in `catalog` and append it.
    pub fn add_from_catalog(
        &mut self,
        catalog: &Catalog,
        query: &str,
    ) -> LayoutResult<&SelectionEntry> {
        let device = catalog.get(query)?;
        Ok(self.add_entry(device))
    }

    /// Set the quantity of entry `index`. Returns false when out of range.
    ///
    /// Spacing-bearing entries are overwritten again by the next cycle.
    pub fn set_quantity(&mut self, index: usize, quantity: u64) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Recompute quantities and grid positions for a room.
    ///
    /// Every spacing-bearing entry gets its quantity overwritten; others keep
    /// theirs. All inputs are validated before the first write, so on error
    /// the ledger is left exactly as it was.
    pub fn compute_and_apply(
        &mut self,
        room_length: f64,
        room_width: f64,
    ) -> Result<CoverageCycle, CoverageError> {
        let room = RoomGeometry::new(room_length, room_width)?;

        let mut quantities = Vec::with_capacity(self.entries.len());
        let mut cycle = CoverageCycle::default();

        for entry in &self.entries {
            let Some(raw) = entry.rated_spacing else {
                quantities.push(None);
                cycle.placed.push(None);
                continue;
            };
            let spacing = Spacing::new(raw)?;
            let quantity = required_quantity(&room, spacing);
            let grid = grid_positions(&room, spacing);
            debug!(
                device = %entry.name,
                spacing = raw,
                quantity,
                placed = grid.len(),
                "computed coverage"
            );
            quantities.push(Some(quantity));
            cycle.placed.push(Some(grid.len()));
            cycle.positions.extend(grid);
        }

        for (entry, quantity) in self.entries.iter_mut().zip(quantities) {
            if let Some(quantity) = quantity {
                entry.quantity = quantity;
            }
        }

        Ok(cycle)
    }
}
