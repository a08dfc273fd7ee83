//! Design options

use std::path::PathBuf;
use std::str::FromStr;

/// A device requested on the command line: `Name` or `Name=QTY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSelection {
    /// Catalog lookup key (`Name` or `Category/Name`)
    pub name: String,
    /// Manual quantity; replaced by the computed one for spacing-rated devices
    pub quantity: Option<u64>,
}

impl DeviceSelection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
        }
    }

    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

impl FromStr for DeviceSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("device name cannot be empty".to_string());
        }
        // only a trailing "=<integer>" is a quantity; other '=' stay in the name
        if let Some((name, qty)) = s.rsplit_once('=') {
            if let Ok(quantity) = qty.trim().parse::<u64>() {
                let name = name.trim();
                if name.is_empty() {
                    return Err(format!("missing device name in '{}'", s));
                }
                return Ok(Self::new(name).with_quantity(quantity));
            }
        }
        Ok(Self::new(s))
    }
}

/// Options for one design cycle
#[derive(Debug, Clone)]
pub struct DesignOptions {
    /// BOQ (CSV) destination
    pub boq_path: PathBuf,
    /// Layout drawing (DXF) destination
    pub drawing_path: PathBuf,
    /// Compute and render, but write nothing
    pub dry_run: bool,
    /// Export an empty ledger instead of failing with `EmptySelection`
    pub allow_empty: bool,
    /// Reject cycles whose grids could exceed this many positions
    pub max_positions: usize,
}

impl Default for DesignOptions {
    fn default() -> Self {
        Self {
            boq_path: PathBuf::from("boq.csv"),
            drawing_path: PathBuf::from("layout.dxf"),
            dry_run: false,
            allow_empty: false,
            max_positions: 100_000,
        }
    }
}

impl DesignOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_boq_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.boq_path = path.into();
        self
    }

    pub fn with_drawing_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.drawing_path = path.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    pub fn with_max_positions(mut self, max_positions: usize) -> Self {
        self.max_positions = max_positions;
        self
    }
}
