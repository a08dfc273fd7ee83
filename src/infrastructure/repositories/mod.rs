//! Repository Implementations
//!
//! Concrete implementations of the CatalogRepository port.

mod builtin_catalog;
mod catalog;

pub use builtin_catalog::BuiltinCatalog;
pub use catalog::TomlCatalogRepository;
