//! Terminal output: text views and NDJSON events.

pub mod blocks;
pub mod json;
pub mod primitives;
pub mod theme;
pub mod views;
