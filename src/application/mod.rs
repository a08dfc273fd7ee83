//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DesignUseCase` - One export cycle: resolve selections, size and place
//!   detectors, render the BOQ and the drawing, write both

pub mod design;

pub use design::{DesignLine, DesignOptions, DesignResult, DesignUseCase, DeviceSelection};
