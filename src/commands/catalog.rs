//! Catalog command handler

use anyhow::Result;
use tracing::debug;

use firelayout::config::Config;

use crate::ui::views::catalog::CatalogView;

pub fn cmd_catalog(config: &Config, json: bool) -> Result<()> {
    let repository = config.catalog_repository();
    let catalog = repository.load()?;
    debug!(source = %repository.describe(), devices = catalog.len(), "catalog loaded");

    if json {
        for (category, device) in catalog.devices() {
            crate::ui::json::emit(serde_json::json!({
                "event": "device",
                "command": "catalog",
                "category": category.name(),
                "name": device.name(),
                "reference": device.reference_tag(),
                "sizing": device.sizing(),
            }))?;
        }
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "catalog",
            "source": repository.describe(),
            "devices": catalog.len(),
        }))?;
        return Ok(());
    }

    let source = repository.describe();
    print!(
        "{}",
        CatalogView::new(&source, &catalog).render(config.output.unicode)
    );
    Ok(())
}
