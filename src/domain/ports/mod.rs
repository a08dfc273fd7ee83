//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod catalog_repository;
pub mod file_system;

pub use catalog_repository::CatalogRepository;
pub use file_system::{FileSystem, FsError, FsResult};
