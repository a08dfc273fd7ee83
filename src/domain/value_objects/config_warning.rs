//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal configuration warning surfaced to CLI users.
///
/// Raised for keys the config schema does not know about, so a typo such as
/// `max_postions` is reported instead of silently falling back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key (last path segment)
    pub key: String,
    /// Full dotted path of the key, e.g. `design.max_postions`
    pub path: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.path, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_and_suggestion() {
        let warning = ConfigWarning {
            key: "max_postions".to_string(),
            path: "design.max_postions".to_string(),
            file: PathBuf::from("firelayout.toml"),
            line: Some(4),
            suggestion: Some("max_positions".to_string()),
        };
        assert_eq!(
            warning.to_string(),
            "unknown config key 'design.max_postions' in firelayout.toml:4 (did you mean 'max_positions'?)"
        );
    }
}
