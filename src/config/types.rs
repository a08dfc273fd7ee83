//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::ports::CatalogRepository;
use crate::error::LayoutResult;
use crate::infrastructure::{BuiltinCatalog, TomlCatalogRepository};

use super::loader::{self, ConfigWarning};

/// Where the equipment catalog comes from
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// TOML catalog file; the built-in catalog is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_boq_path")]
    pub boq: PathBuf,

    #[serde(default = "default_drawing_path")]
    pub drawing: PathBuf,

    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            boq: default_boq_path(),
            drawing: default_drawing_path(),
            verbosity: Verbosity::default(),
            unicode: true,
        }
    }
}

fn default_boq_path() -> PathBuf {
    PathBuf::from("boq.csv")
}

fn default_drawing_path() -> PathBuf {
    PathBuf::from("layout.dxf")
}

fn default_true() -> bool {
    true
}

/// Design cycle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignConfig {
    /// Export an empty selection (header-only BOQ, outline-only drawing)
    /// instead of rejecting it
    #[serde(default)]
    pub allow_empty: bool,

    /// Upper bound on grid candidates per cycle
    #[serde(default = "default_max_positions")]
    pub max_positions: usize,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            allow_empty: false,
            max_positions: default_max_positions(),
        }
    }
}

fn default_max_positions() -> usize {
    100_000
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub design: DesignConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LayoutResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LayoutResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve explicit path, project file, user file or defaults, then
    /// apply `FIRELAYOUT_*` environment overrides.
    pub fn discover(explicit: Option<&Path>) -> LayoutResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit)
    }

    /// Catalog repository selected by this config.
    pub fn catalog_repository(&self) -> Box<dyn CatalogRepository> {
        match &self.catalog.path {
            Some(path) => Box::new(TomlCatalogRepository::new(path)),
            None => Box::new(BuiltinCatalog::new()),
        }
    }
}
