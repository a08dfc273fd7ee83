//! Domain Value Objects
//!
//! Immutable value types that carry their own validation.

mod config_warning;
mod coverage_error;
mod position;
mod room;
mod spacing;

pub use config_warning::ConfigWarning;
pub use coverage_error::CoverageError;
pub use position::DetectorPosition;
pub use room::RoomGeometry;
pub use spacing::Spacing;
