//! Domain Layer
//!
//! The sizing and layout rules, free of I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Validated inputs (RoomGeometry, Spacing, DetectorPosition)
//! - `entities/` - Catalog, Selection Ledger, layout drawing
//! - `services/` - The coverage engine (quantity rule + grid generator)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Coverage services are stateless and deterministic
//! 3. **Ports & Adapters** - Catalog loading and file output go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
