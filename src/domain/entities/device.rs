//! Device specification entity

use serde::Serialize;

/// How a device is sized. A device is governed by at most one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SizingMetric {
    /// Center-to-center spacing in meters (square-cell area detectors)
    Spacing(f64),
    /// Rated coverage area in m² (volumetric detectors)
    CoverageArea(f64),
    /// Maximum travel distance in meters (manual stations)
    MaxTravelDistance(f64),
}

impl std::fmt::Display for SizingMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizingMetric::Spacing(m) => write!(f, "spacing {} m", m),
            SizingMetric::CoverageArea(m2) => write!(f, "coverage {} m²", m2),
            SizingMetric::MaxTravelDistance(m) => write!(f, "max travel {} m", m),
        }
    }
}

/// A catalog device: name, standard reference and optional sizing metric.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSpec {
    name: String,
    reference_tag: String,
    sizing: Option<SizingMetric>,
}

impl DeviceSpec {
    pub fn new(name: impl Into<String>, reference_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference_tag: reference_tag.into(),
            sizing: None,
        }
    }

    pub fn with_sizing(mut self, sizing: SizingMetric) -> Self {
        self.sizing = Some(sizing);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reference_tag(&self) -> &str {
        &self.reference_tag
    }

    pub fn sizing(&self) -> Option<SizingMetric> {
        self.sizing
    }

    /// Spacing used by the coverage engine; `None` excludes the device from layout.
    pub fn rated_spacing(&self) -> Option<f64> {
        match self.sizing {
            Some(SizingMetric::Spacing(m)) => Some(m),
            _ => None,
        }
    }

    pub fn rated_coverage_area(&self) -> Option<f64> {
        match self.sizing {
            Some(SizingMetric::CoverageArea(m2)) => Some(m2),
            _ => None,
        }
    }

    pub fn max_travel_distance(&self) -> Option<f64> {
        match self.sizing {
            Some(SizingMetric::MaxTravelDistance(m)) => Some(m),
            _ => None,
        }
    }
}
