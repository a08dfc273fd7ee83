//! Design Use Case
//!
//! Sizes the selected devices for one room and exports the results.

mod options;
mod result;
mod use_case;


pub use options::{DesignOptions, DeviceSelection};
pub use result::{DesignLine, DesignResult};
pub use use_case::DesignUseCase;
