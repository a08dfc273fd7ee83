//! Design tokens for firelayout CLI output.
//!
//! All icons must be sourced from this module.

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const DESIGN: &str = "📐";
    pub const CATALOG: &str = "📋";
    pub const GRID: &str = "▦";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const DESIGN: &str = "[DESIGN]";
    pub const CATALOG: &str = "[CATALOG]";
    pub const GRID: &str = "[GRID]";
}
