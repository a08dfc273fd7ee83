//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use firelayout::DeviceSelection;

/// firelayout - fire detection sizing, BOQ and layout drawing
#[derive(Parser, Debug)]
#[command(name = "firelayout")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Results are an engineering aid and must be verified by a competent fire engineer.")]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./firelayout.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog devices and their sizing metric
    Catalog,

    /// Size selected devices for a room and export BOQ + drawing
    Design {
        /// Room length in meters
        #[arg(short, long, allow_negative_numbers = true)]
        length: f64,

        /// Room width in meters
        #[arg(short, long, allow_negative_numbers = true)]
        width: f64,

        /// Device to add, as NAME, CATEGORY/NAME or NAME=QTY (repeatable)
        #[arg(short, long = "device", value_name = "DEVICE")]
        devices: Vec<DeviceSelection>,

        /// BOQ output path (CSV)
        #[arg(long)]
        boq: Option<PathBuf>,

        /// Layout drawing output path (DXF)
        #[arg(long)]
        drawing: Option<PathBuf>,

        /// Compute and report without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Preview quantity and grid for one spacing without exporting
    Grid {
        /// Room length in meters
        #[arg(short, long, allow_negative_numbers = true)]
        length: f64,

        /// Room width in meters
        #[arg(short, long, allow_negative_numbers = true)]
        width: f64,

        /// Rated spacing in meters
        #[arg(short, long, allow_negative_numbers = true)]
        spacing: f64,
    },
}

impl Commands {
    /// Subcommand name, used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Catalog => "catalog",
            Commands::Design { .. } => "design",
            Commands::Grid { .. } => "grid",
        }
    }
}
