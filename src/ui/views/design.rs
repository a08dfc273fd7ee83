use firelayout::application::DesignResult;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub struct DesignView<'a> {
    result: &'a DesignResult,
}

impl<'a> DesignView<'a> {
    pub fn new(result: &'a DesignResult) -> Self {
        Self { result }
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Design, "Fire Detection Design");
        header.add(
            "Room",
            format!("{} m x {} m", self.result.room_length, self.result.room_width),
        );
        header.add("Entries", self.result.lines.len().to_string());
        header.add("Detector positions", self.result.positions.len().to_string());
        out.push_str(&header.render(supports_unicode));
        out.push('\n');

        for line in &self.result.lines {
            out.push_str(&format!(
                "  {:<40} {:<10} {:>5}\n",
                line.item, line.reference, line.quantity
            ));
        }

        for line in self.result.under_placed() {
            out.push_str(&format!(
                "{} {}: grid places {} of {} required\n",
                Icon::Warning.render(supports_unicode),
                line.item,
                line.placed.unwrap_or_default(),
                line.quantity
            ));
        }

        out.push('\n');
        if self.result.dry_run {
            out.push_str(&format!(
                "{} Dry run, nothing written\n",
                Icon::Success.render(supports_unicode)
            ));
        } else {
            for path in &self.result.written {
                out.push_str(&format!(
                    "{} Wrote {}\n",
                    Icon::Success.render(supports_unicode),
                    path.display()
                ));
            }
        }
        out
    }
}
