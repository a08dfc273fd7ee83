//! firelayout CLI - fire detection sizing, BOQ and layout drawing
//!
//! Usage: firelayout <COMMAND>
//!
//! Commands:
//!   catalog  List catalog devices and their sizing metric
//!   design   Size selected devices for a room and export BOQ + drawing
//!   grid     Preview quantity and grid for one spacing

mod cli;
mod commands;
mod logging;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use firelayout::config::{Config, Verbosity};
use firelayout::{CoverageError, LayoutError};

use cli::{Cli, Commands};
use commands::design::DesignArgs;
use ui::json::ErrorEvent;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;
    let command = cli.command.name();

    if let Err(err) = run(cli) {
        report_error(json, command, &err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, warnings) = match Config::discover(cli.config.as_deref()) {
        Ok(found) => found,
        Err(e) => {
            logging::init(cli.verbose, Verbosity::default());
            return Err(e.into());
        }
    };
    logging::init(cli.verbose, config.output.verbosity);
    for warning in &warnings {
        warn!("{}", warning);
    }

    match cli.command {
        Commands::Catalog => commands::catalog::cmd_catalog(&config, cli.json),
        Commands::Design {
            length,
            width,
            devices,
            boq,
            drawing,
            dry_run,
        } => {
            let args = DesignArgs {
                length,
                width,
                devices,
                boq,
                drawing,
                dry_run,
            };
            commands::design::cmd_design(&config, args, cli.json)
        }
        Commands::Grid {
            length,
            width,
            spacing,
        } => commands::grid::cmd_grid(&config, length, width, spacing, cli.json),
    }
}

fn report_error(json: bool, command: &str, err: &anyhow::Error) {
    if json {
        let event = ErrorEvent::new(command, error_code(err), format!("{:#}", err));
        if ui::json::emit_event(&event).is_ok() {
            return;
        }
    }
    eprintln!("Error: {:#}", err);
}

fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<LayoutError>() {
        return e.code();
    }
    match err.downcast_ref::<CoverageError>() {
        Some(e) => LayoutError::from(*e).code(),
        None => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_reads_through_anyhow() {
        let err: anyhow::Error = CoverageError::InvalidSpacing { spacing: 0.0 }.into();
        assert_eq!(error_code(&err), "invalid_spacing");

        let err: anyhow::Error = LayoutError::EmptySelection.into();
        assert_eq!(error_code(&err), "empty_selection");

        assert_eq!(error_code(&anyhow::anyhow!("other")), "error");
    }
}
