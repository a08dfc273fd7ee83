use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Warning,
    Arrow,
    Design,
    Catalog,
    Grid,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Design) => theme::icons::DESIGN,
            (true, Icon::Catalog) => theme::icons::CATALOG,
            (true, Icon::Grid) => theme::icons::GRID,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Design) => theme::icons_ascii::DESIGN,
            (false, Icon::Catalog) => theme::icons_ascii::CATALOG,
            (false, Icon::Grid) => theme::icons_ascii::GRID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_fallback() {
        assert_eq!(Icon::Warning.render(false), "[WARN]");
        assert_eq!(Icon::Success.render(true), "✓");
    }
}
