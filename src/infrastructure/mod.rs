//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `repositories/` - Catalog sources (built-in, TOML file)
//! - `export/` - BOQ (CSV) and layout drawing (DXF) renderers

pub mod export;
pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use export::{render_boq, render_dxf};
pub use fs::LocalFs;
pub use repositories::{BuiltinCatalog, TomlCatalogRepository};
