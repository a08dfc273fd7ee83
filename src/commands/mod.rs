//! Command handlers
//!
//! Each handler receives the resolved config and the `--json` flag, runs one
//! library operation and prints either a text view or NDJSON events.

pub mod catalog;
pub mod design;
pub mod grid;
