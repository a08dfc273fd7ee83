//! CatalogRepository port - where equipment reference data comes from

use crate::domain::entities::Catalog;
use crate::error::LayoutResult;

/// Source of the equipment catalog.
///
/// Implementations:
/// - `BuiltinCatalog` - the bundled NFPA 72 library
/// - `TomlCatalogRepository` - a user-supplied TOML file
pub trait CatalogRepository {
    /// Load and validate the catalog.
    fn load(&self) -> LayoutResult<Catalog>;

    /// Human-readable origin, used in headers and logs.
    fn describe(&self) -> String;
}
