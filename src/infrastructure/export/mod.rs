//! Exporters
//!
//! Render domain entities to file content. Rendering is pure; writing is
//! left to the FileSystem port.

mod boq;
mod dxf;

pub use boq::{render_boq, BOQ_HEADER};
pub use dxf::{render_dxf, DxfEntity, DETECTOR_LAYER, ROOM_LAYER};
