use firelayout::domain::entities::Catalog;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub struct CatalogView<'a> {
    source: &'a str,
    catalog: &'a Catalog,
}

impl<'a> CatalogView<'a> {
    pub fn new(source: &'a str, catalog: &'a Catalog) -> Self {
        Self { source, catalog }
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Catalog, "Equipment Catalog");
        header.add("Source", self.source);
        header.add("Devices", self.catalog.len().to_string());
        out.push_str(&header.render(supports_unicode));

        for category in self.catalog.categories() {
            out.push('\n');
            out.push_str(category.name());
            out.push('\n');
            for device in category.devices() {
                let sizing = device
                    .sizing()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "manual quantity".to_string());
                out.push_str(&format!(
                    "  {} {:<40} {:<10} {}\n",
                    Icon::Arrow.render(supports_unicode),
                    device.name(),
                    device.reference_tag(),
                    sizing
                ));
            }
        }
        out
    }
}
