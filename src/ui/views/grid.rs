use firelayout::domain::value_objects::DetectorPosition;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub struct GridView<'a> {
    pub length: f64,
    pub width: f64,
    pub spacing: f64,
    pub quantity: u64,
    pub positions: &'a [DetectorPosition],
}

impl GridView<'_> {
    pub fn render(&self, supports_unicode: bool) -> String {
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Grid, "Coverage Grid");
        header.add("Room", format!("{} m x {} m", self.length, self.width));
        header.add("Spacing", format!("{} m", self.spacing));
        header.add("Required quantity", self.quantity.to_string());
        header.add("Grid positions", self.positions.len().to_string());
        out.push_str(&header.render(supports_unicode));

        if (self.positions.len() as u64) < self.quantity {
            out.push_str(&format!(
                "{} grid places fewer detectors than the area rule requires\n",
                Icon::Warning.render(supports_unicode)
            ));
        }

        for position in self.positions {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Arrow.render(supports_unicode),
                position
            ));
        }
        out
    }
}
