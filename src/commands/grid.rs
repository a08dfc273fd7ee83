//! Grid preview command handler

use anyhow::Result;

use firelayout::config::Config;
use firelayout::domain::services::{compute_required_quantity, generate_grid, GridDimensions};
use firelayout::domain::value_objects::{RoomGeometry, Spacing};
use firelayout::LayoutError;

use crate::ui::views::grid::GridView;

pub fn cmd_grid(config: &Config, length: f64, width: f64, spacing: f64, json: bool) -> Result<()> {
    let quantity = compute_required_quantity(length, width, spacing)?;

    let dims = GridDimensions::of(&RoomGeometry::new(length, width)?, Spacing::new(spacing)?);
    let limit = config.design.max_positions;
    if dims.candidate_count() > limit {
        return Err(LayoutError::GridTooLarge {
            positions: dims.candidate_count(),
            limit,
        }
        .into());
    }

    let positions = generate_grid(length, width, spacing)?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "grid",
            "room_length": length,
            "room_width": width,
            "spacing": spacing,
            "quantity": quantity,
            "columns": dims.columns,
            "rows": dims.rows,
            "positions": positions,
        }))?;
        return Ok(());
    }

    let view = GridView {
        length,
        width,
        spacing,
        quantity,
        positions: &positions,
    };
    print!("{}", view.render(config.output.unicode));
    Ok(())
}
