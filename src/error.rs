//! Error types for firelayout
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

pub use crate::domain::services::CoverageError;

/// Result type alias for firelayout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Main error type for firelayout operations
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Room geometry or device spacing rejected by the coverage engine
    #[error(transparent)]
    Coverage(#[from] CoverageError),

    /// Export requested with nothing selected
    #[error("no devices selected - add at least one device before exporting")]
    EmptySelection,

    /// Selection names a device the catalog does not contain
    #[error("unknown device '{name}' - run 'firelayout catalog' to list devices")]
    UnknownDevice { name: String },

    /// Catalog file could not be parsed
    #[error("invalid catalog in {file}: {message}")]
    InvalidCatalog { file: PathBuf, message: String },

    /// Two devices with the same name inside one category
    #[error("duplicate device '{name}' in category '{category}'")]
    DuplicateDevice { category: String, name: String },

    /// Device declares more than one sizing metric
    #[error("device '{name}' declares more than one sizing metric")]
    ConflictingSizing { name: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Layout would produce more markers than allowed
    #[error("layout has {positions} detector positions, limit is {limit}")]
    GridTooLarge { positions: usize, limit: usize },

    /// Writing an output file failed
    #[error("failed to write {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl LayoutError {
    /// Short machine-readable code used in JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            LayoutError::Coverage(CoverageError::InvalidGeometry { .. }) => "invalid_geometry",
            LayoutError::Coverage(CoverageError::InvalidSpacing { .. }) => "invalid_spacing",
            LayoutError::EmptySelection => "empty_selection",
            LayoutError::UnknownDevice { .. } => "unknown_device",
            LayoutError::InvalidCatalog { .. }
            | LayoutError::DuplicateDevice { .. }
            | LayoutError::ConflictingSizing { .. } => "invalid_catalog",
            LayoutError::InvalidConfig { .. } => "invalid_config",
            LayoutError::GridTooLarge { .. } => "grid_too_large",
            LayoutError::WriteFailed { .. } | LayoutError::Io(_) | LayoutError::Csv(_) => "io",
        }
    }
}
