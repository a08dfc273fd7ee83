//! Design command handler

use std::path::PathBuf;

use anyhow::Result;

use firelayout::application::{DesignOptions, DesignUseCase, DeviceSelection};
use firelayout::config::Config;
use firelayout::infrastructure::LocalFs;

use crate::ui::views::design::DesignView;

/// Arguments of `firelayout design`
#[derive(Debug, Clone)]
pub struct DesignArgs {
    pub length: f64,
    pub width: f64,
    pub devices: Vec<DeviceSelection>,
    pub boq: Option<PathBuf>,
    pub drawing: Option<PathBuf>,
    pub dry_run: bool,
}

pub fn cmd_design(config: &Config, args: DesignArgs, json: bool) -> Result<()> {
    let catalog = config.catalog_repository().load()?;
    let use_case = DesignUseCase::new(catalog, LocalFs::new());
    let mut ledger = use_case.build_ledger(&args.devices)?;

    // flags win over config and environment
    let options = DesignOptions::new()
        .with_boq_path(args.boq.unwrap_or_else(|| config.output.boq.clone()))
        .with_drawing_path(args.drawing.unwrap_or_else(|| config.output.drawing.clone()))
        .with_dry_run(args.dry_run)
        .with_allow_empty(config.design.allow_empty)
        .with_max_positions(config.design.max_positions);

    let result = use_case.execute(&mut ledger, args.length, args.width, &options)?;

    if json {
        for line in &result.lines {
            crate::ui::json::emit(serde_json::json!({
                "event": "entry",
                "command": "design",
                "item": line.item,
                "reference": line.reference,
                "quantity": line.quantity,
                "rated_spacing": line.rated_spacing,
                "placed": line.placed,
            }))?;
        }
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "design",
            "room_length": result.room_length,
            "room_width": result.room_width,
            "total_quantity": result.total_quantity(),
            "positions": result.positions,
            "written": result.written,
            "dry_run": result.dry_run,
        }))?;
        return Ok(());
    }

    print!("{}", DesignView::new(&result).render(config.output.unicode));
    Ok(())
}
