//! Design Use Case
//!
//! Orchestrates one export cycle.

use std::path::Path;

use tracing::{debug, info};

use crate::domain::entities::{Catalog, LayoutDrawing, SelectionLedger};
use crate::domain::ports::FileSystem;
use crate::domain::services::GridDimensions;
use crate::domain::value_objects::{RoomGeometry, Spacing};
use crate::error::{LayoutError, LayoutResult};
use crate::infrastructure::export::{render_boq, render_dxf};

use super::options::{DesignOptions, DeviceSelection};
use super::result::{DesignLine, DesignResult};

/// Design use case - sizes a ledger for a room and exports BOQ + drawing
pub struct DesignUseCase<FS>
where
    FS: FileSystem,
{
    catalog: Catalog,
    fs: FS,
}

impl<FS> DesignUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new design use case over an already-loaded catalog
    pub fn new(catalog: Catalog, fs: FS) -> Self {
        Self { catalog, fs }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Build a fresh ledger from selections, in order.
    ///
    /// Fails with `UnknownDevice` on the first name the catalog lacks.
    pub fn build_ledger(&self, selections: &[DeviceSelection]) -> LayoutResult<SelectionLedger> {
        let mut ledger = SelectionLedger::new();
        for selection in selections {
            ledger.add_from_catalog(&self.catalog, &selection.name)?;
            if let Some(quantity) = selection.quantity {
                ledger.set_quantity(ledger.len() - 1, quantity);
            }
        }
        Ok(ledger)
    }

    /// Run the cycle on `ledger` for a `room_length` x `room_width` room.
    ///
    /// Every check runs and both outputs are rendered in memory before the
    /// first write. On a validation error neither the ledger nor the disk
    /// is touched.
    pub fn execute(
        &self,
        ledger: &mut SelectionLedger,
        room_length: f64,
        room_width: f64,
        options: &DesignOptions,
    ) -> LayoutResult<DesignResult> {
        if ledger.is_empty() && !options.allow_empty {
            return Err(LayoutError::EmptySelection);
        }

        let room = RoomGeometry::new(room_length, room_width)?;
        check_grid_size(ledger, &room, options.max_positions)?;

        let cycle = ledger.compute_and_apply(room_length, room_width)?;

        let lines = ledger
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| DesignLine {
                item: entry.name().to_string(),
                reference: entry.reference_tag().to_string(),
                quantity: entry.quantity(),
                rated_spacing: entry.rated_spacing(),
                placed: cycle.placed(index),
            })
            .collect::<Vec<_>>();

        let positions = cycle.into_positions();
        let boq = render_boq(ledger)?;
        let drawing = LayoutDrawing::new(&room, positions.clone());
        let dxf = render_dxf(&drawing);

        let mut result = DesignResult {
            room_length,
            room_width,
            lines,
            positions,
            written: Vec::new(),
            dry_run: options.dry_run,
        };

        if options.dry_run {
            debug!("dry run, skipping writes");
        } else {
            self.write(&options.boq_path, &boq)?;
            result.written.push(options.boq_path.clone());
            self.write(&options.drawing_path, &dxf)?;
            result.written.push(options.drawing_path.clone());
        }

        info!(
            entries = result.lines.len(),
            positions = result.positions.len(),
            written = result.written.len(),
            "design cycle complete"
        );
        Ok(result)
    }

    fn write(&self, path: &Path, content: &str) -> LayoutResult<()> {
        self.fs
            .write(path, content)
            .map_err(|e| LayoutError::WriteFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

/// Reject cycles whose combined candidate grids exceed `limit`.
///
/// Entries with an invalid spacing are skipped here; `compute_and_apply`
/// reports them.
fn check_grid_size(ledger: &SelectionLedger, room: &RoomGeometry, limit: usize) -> LayoutResult<()> {
    let candidates = ledger
        .entries()
        .iter()
        .filter_map(|e| e.rated_spacing())
        .filter_map(|s| Spacing::new(s).ok())
        .map(|s| GridDimensions::of(room, s).candidate_count())
        .fold(0usize, usize::saturating_add);

    if candidates > limit {
        return Err(LayoutError::GridTooLarge {
            positions: candidates,
            limit,
        });
    }
    Ok(())
}
