//! Built-in equipment library
//!
//! Generic fire detection devices tagged against NFPA 72. Used whenever no
//! catalog file is configured.

use crate::domain::entities::{Catalog, Category, DeviceSpec, SizingMetric};
use crate::domain::ports::CatalogRepository;
use crate::error::LayoutResult;

const NFPA_72: &str = "NFPA 72";

/// Repository serving the bundled catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    /// The bundled catalog itself.
    pub fn catalog() -> Catalog {
        let spaced = |name: &str, m: f64| {
            DeviceSpec::new(name, NFPA_72).with_sizing(SizingMetric::Spacing(m))
        };

        Catalog::new(vec![
            Category::new(
                "Smoke Detection",
                vec![
                    spaced("Point Smoke Detector", 9.1),
                    spaced("Beam Smoke Detector", 18.0),
                ],
            ),
            Category::new(
                "Heat Detection",
                vec![
                    spaced("Fixed Temperature Heat Detector", 15.2),
                    spaced("Rate-of-Rise Heat Detector", 15.2),
                ],
            ),
            Category::new(
                "Flame Detection",
                vec![
                    DeviceSpec::new("UV Flame Detector", NFPA_72)
                        .with_sizing(SizingMetric::CoverageArea(400.0)),
                    DeviceSpec::new("IR Flame Detector", NFPA_72)
                        .with_sizing(SizingMetric::CoverageArea(600.0)),
                ],
            ),
            Category::new(
                "Manual Devices",
                vec![DeviceSpec::new("Manual Call Point", NFPA_72)
                    .with_sizing(SizingMetric::MaxTravelDistance(61.0))],
            ),
            Category::new(
                "Notification",
                vec![
                    DeviceSpec::new("Sounder", NFPA_72),
                    DeviceSpec::new("Strobe", NFPA_72),
                ],
            ),
        ])
    }
}

impl CatalogRepository for BuiltinCatalog {
    fn load(&self) -> LayoutResult<Catalog> {
        let catalog = Self::catalog();
        catalog.validate()?;
        Ok(catalog)
    }

    fn describe(&self) -> String {
        "built-in (NFPA 72)".to_string()
    }
}
