//! Bill of quantities (CSV)

use csv::{Terminator, WriterBuilder};
use serde::Serialize;

use crate::domain::entities::SelectionLedger;
use crate::error::{LayoutError, LayoutResult};

/// Fixed column headers.
pub const BOQ_HEADER: [&str; 3] = ["Item", "Quantity", "NFPA Reference"];

#[derive(Serialize)]
struct BoqRow<'a> {
    item: &'a str,
    quantity: u64,
    reference: &'a str,
}

/// One row per ledger entry, in ledger order, under a header row.
pub fn render_boq(ledger: &SelectionLedger) -> LayoutResult<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(BOQ_HEADER)?;
    for entry in ledger.entries() {
        writer.serialize(BoqRow {
            item: entry.name(),
            quantity: entry.quantity(),
            reference: entry.reference_tag(),
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| LayoutError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| LayoutError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
