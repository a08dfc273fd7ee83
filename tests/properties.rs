//! Property tests for firelayout.
//!
//! Randomized rooms and spacings exercise the sizing rules and the
//! all-or-nothing behavior of the selection ledger.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/coverage.rs"]
mod coverage;

#[path = "properties/ledger.rs"]
mod ledger;
