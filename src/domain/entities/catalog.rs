//! Equipment catalog entity
//!
//! Immutable reference data, loaded once and passed to whoever needs it.

use std::collections::HashSet;

use crate::error::{LayoutError, LayoutResult};

use super::device::DeviceSpec;

/// A named group of devices, e.g. "Smoke Detection".
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    name: String,
    devices: Vec<DeviceSpec>,
}

impl Category {
    pub fn new(name: impl Into<String>, devices: Vec<DeviceSpec>) -> Self {
        Self {
            name: name.into(),
            devices,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn devices(&self) -> &[DeviceSpec] {
        &self.devices
    }
}

/// Ordered set of categories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Device names must be unique within their category.
    pub fn validate(&self) -> LayoutResult<()> {
        for category in &self.categories {
            let mut seen = HashSet::new();
            for device in category.devices() {
                if !seen.insert(device.name()) {
                    return Err(LayoutError::DuplicateDevice {
                        category: category.name().to_string(),
                        name: device.name().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All devices in catalog order, paired with their category.
    pub fn devices(&self) -> impl Iterator<Item = (&Category, &DeviceSpec)> {
        self.categories
            .iter()
            .flat_map(|c| c.devices().iter().map(move |d| (c, d)))
    }

    /// Find a device by `Name` (first match in catalog order) or `Category/Name`.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    pub fn find(&self, query: &str) -> Option<&DeviceSpec> {
        let query = query.trim();
        if let Some((category, name)) = query.split_once('/') {
            let (category, name) = (category.trim(), name.trim());
            return self
                .devices()
                .find(|(c, d)| {
                    c.name().eq_ignore_ascii_case(category) && d.name().eq_ignore_ascii_case(name)
                })
                .map(|(_, d)| d);
        }
        self.devices()
            .find(|(_, d)| d.name().eq_ignore_ascii_case(query))
            .map(|(_, d)| d)
    }

    /// Like [`Catalog::find`], failing with `UnknownDevice`.
    pub fn get(&self, query: &str) -> LayoutResult<&DeviceSpec> {
        self.find(query).ok_or_else(|| LayoutError::UnknownDevice {
            name: query.trim().to_string(),
        })
    }

    /// Total number of devices across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.devices().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
