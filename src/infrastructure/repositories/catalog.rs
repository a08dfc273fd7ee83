//! TOML Catalog Repository
//!
//! Implements the CatalogRepository port for user-supplied catalog files:
//!
//! ```toml
//! [[category]]
//! name = "Smoke Detection"
//!
//! [[category.device]]
//! name = "Point Smoke Detector"
//! reference = "NFPA 72"
//! spacing_m = 9.1
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::{Catalog, Category, DeviceSpec, SizingMetric};
use crate::domain::ports::{CatalogRepository, FileSystem};
use crate::error::{LayoutError, LayoutResult};
use crate::infrastructure::fs::LocalFs;

/// TOML-file backed catalog repository
pub struct TomlCatalogRepository {
    path: PathBuf,
    fs: LocalFs,
}

impl TomlCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fs: LocalFs::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCatalog {
    #[serde(default, rename = "category")]
    categories: Vec<TomlCategory>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCategory {
    name: String,
    #[serde(default, rename = "device")]
    devices: Vec<TomlDevice>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDevice {
    name: String,
    reference: String,
    #[serde(default)]
    spacing_m: Option<f64>,
    #[serde(default)]
    coverage_m2: Option<f64>,
    #[serde(default)]
    max_travel_distance_m: Option<f64>,
}

impl TomlDevice {
    fn into_spec(self) -> LayoutResult<DeviceSpec> {
        let metrics: Vec<SizingMetric> = [
            self.spacing_m.map(SizingMetric::Spacing),
            self.coverage_m2.map(SizingMetric::CoverageArea),
            self.max_travel_distance_m.map(SizingMetric::MaxTravelDistance),
        ]
        .into_iter()
        .flatten()
        .collect();

        let spec = DeviceSpec::new(self.name, self.reference);
        match metrics.as_slice() {
            [] => Ok(spec),
            [metric] => Ok(spec.with_sizing(*metric)),
            _ => Err(LayoutError::ConflictingSizing {
                name: spec.name().to_string(),
            }),
        }
    }
}

/// Parse catalog TOML; `file` is only used in error messages.
pub(crate) fn parse_catalog(content: &str, file: &Path) -> LayoutResult<Catalog> {
    let raw: TomlCatalog = toml::from_str(content).map_err(|e| LayoutError::InvalidCatalog {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    let categories = raw
        .categories
        .into_iter()
        .map(|c| {
            let devices = c
                .devices
                .into_iter()
                .map(TomlDevice::into_spec)
                .collect::<LayoutResult<Vec<_>>>()?;
            Ok(Category::new(c.name, devices))
        })
        .collect::<LayoutResult<Vec<_>>>()?;

    let catalog = Catalog::new(categories);
    catalog.validate()?;
    Ok(catalog)
}

impl CatalogRepository for TomlCatalogRepository {
    fn load(&self) -> LayoutResult<Catalog> {
        let content = self
            .fs
            .read(&self.path)
            .map_err(|e| LayoutError::InvalidCatalog {
                file: self.path.clone(),
                message: e.to_string(),
            })?;
        let catalog = parse_catalog(&content, &self.path)?;
        debug!(path = %self.path.display(), devices = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
[[category]]
name = "Smoke Detection"

[[category.device]]
name = "Point Smoke Detector"
reference = "NFPA 72 17.7.3.2.3"
spacing_m = 9.1

[[category]]
name = "Flame Detection"

[[category.device]]
name = "IR Flame Detector"
reference = "NFPA 72"
coverage_m2 = 600

[[category.device]]
name = "Beacon"
reference = "NFPA 72"
"#;

    #[test]
    fn parses_categories_and_metrics() {
        let catalog = parse_catalog(SAMPLE, Path::new("catalog.toml")).unwrap();
        assert_eq!(catalog.categories().len(), 2);
        let smoke = catalog.find("Point Smoke Detector").unwrap();
        assert_eq!(smoke.rated_spacing(), Some(9.1));
        assert_eq!(smoke.reference_tag(), "NFPA 72 17.7.3.2.3");
        assert_eq!(
            catalog.find("IR Flame Detector").unwrap().rated_coverage_area(),
            Some(600.0)
        );
        assert!(catalog.find("Beacon").unwrap().sizing().is_none());
    }

    #[test]
    fn rejects_two_metrics_on_one_device() {
        let content = r#"
[[category]]
name = "Odd"
[[category.device]]
name = "Hybrid"
reference = "x"
spacing_m = 9.1
coverage_m2 = 80
"#;
        let err = parse_catalog(content, Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, LayoutError::ConflictingSizing { ref name } if name == "Hybrid"));
    }

    #[test]
    fn rejects_non_numeric_spacing() {
        let content = r#"
[[category]]
name = "Smoke"
[[category.device]]
name = "Point"
reference = "x"
spacing_m = "wide"
"#;
        let err = parse_catalog(content, Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidCatalog { .. }));
    }

    #[test]
    fn rejects_unknown_fields() {
        let content = r#"
[[category]]
name = "Smoke"
[[category.device]]
name = "Point"
reference = "x"
default_spacing_m = 9.1
"#;
        assert!(parse_catalog(content, Path::new("c.toml")).is_err());
    }

    #[test]
    fn negative_spacing_is_accepted_at_load_time() {
        let content = r#"
[[category]]
name = "Smoke"
[[category.device]]
name = "Point"
reference = "x"
spacing_m = -2.0
"#;
        let catalog = parse_catalog(content, Path::new("c.toml")).unwrap();
        assert_eq!(catalog.find("Point").unwrap().rated_spacing(), Some(-2.0));
    }

    #[test]
    fn rejects_duplicate_device_names() {
        let content = r#"
[[category]]
name = "Notification"
[[category.device]]
name = "Sounder"
reference = "x"
[[category.device]]
name = "Sounder"
reference = "y"
"#;
        let err = parse_catalog(content, Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateDevice { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let repo = TomlCatalogRepository::new(&path);
        let catalog = repo.load().unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(repo.describe(), path.display().to_string());
    }

    #[test]
    fn load_missing_file_is_invalid_catalog() {
        let dir = tempdir().unwrap();
        let repo = TomlCatalogRepository::new(dir.path().join("nope.toml"));
        assert!(matches!(
            repo.load(),
            Err(LayoutError::InvalidCatalog { .. })
        ));
    }
}
