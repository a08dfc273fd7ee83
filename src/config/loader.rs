//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LayoutError, LayoutResult};

use super::types::{Config, Verbosity};

pub use crate::domain::value_objects::ConfigWarning;

/// Config file picked up from the working directory
pub const PROJECT_CONFIG_FILE: &str = "firelayout.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LayoutResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LayoutError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                path: path_str.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit file (must exist), project file, user file, or defaults.
///
/// A broken explicit or project file is an error; a broken user file is too,
/// since silently ignoring it would change outputs without notice.
pub fn discover(explicit: Option<&Path>) -> LayoutResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [Some(PathBuf::from(PROJECT_CONFIG_FILE)), user_config_path()]
            .into_iter()
            .flatten()
            .find(|p| p.is_file()),
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((apply_overrides(config, |key| std::env::var(key).ok()), warnings))
}

/// Apply `FIRELAYOUT_*` overrides using `lookup` to read variables.
///
/// Unparseable values are ignored and the configured value is kept.
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(path) = lookup("FIRELAYOUT_CATALOG") {
        config.catalog.path = if path.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(path))
        };
    }

    if let Some(path) = lookup("FIRELAYOUT_BOQ") {
        config.output.boq = PathBuf::from(path);
    }

    if let Some(path) = lookup("FIRELAYOUT_DRAWING") {
        config.output.drawing = PathBuf::from(path);
    }

    if let Some(verbosity) = lookup("FIRELAYOUT_VERBOSITY").as_deref().and_then(Verbosity::parse)
    {
        config.output.verbosity = verbosity;
    }

    if let Some(val) = lookup("FIRELAYOUT_ALLOW_EMPTY") {
        config.design.allow_empty = val.to_lowercase() != "false" && val != "0";
    }

    if let Some(limit) = lookup("FIRELAYOUT_MAX_POSITIONS").and_then(|v| v.trim().parse().ok()) {
        config.design.max_positions = limit;
    }

    config
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("firelayout").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "catalog",
        "path",
        "output",
        "boq",
        "drawing",
        "verbosity",
        "unicode",
        "design",
        "allow_empty",
        "max_positions",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
