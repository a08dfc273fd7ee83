//! Configuration module for firelayout
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FIRELAYOUT_*)
//! 3. Explicit `--config` file, else `./firelayout.toml`
//! 4. User config (`<config dir>/firelayout/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{apply_overrides, PROJECT_CONFIG_FILE};
pub use types::{CatalogConfig, Config, DesignConfig, OutputConfig, Verbosity};
