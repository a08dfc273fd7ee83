//! Design result types

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::DetectorPosition;

/// One ledger entry after the cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignLine {
    pub item: String,
    pub reference: String,
    pub quantity: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rated_spacing: Option<f64>,
    /// Grid positions drawn for this entry; `None` when not spacing-rated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placed: Option<usize>,
}

impl DesignLine {
    /// The area rule asks for more units than the grid could place.
    pub fn is_under_placed(&self) -> bool {
        matches!(self.placed, Some(placed) if (placed as u64) < self.quantity)
    }
}

/// Result of a design cycle
#[derive(Debug, Clone, Default, Serialize)]
pub struct DesignResult {
    pub room_length: f64,
    pub room_width: f64,
    pub lines: Vec<DesignLine>,
    pub positions: Vec<DetectorPosition>,
    /// Files written, in write order (empty on dry run)
    pub written: Vec<PathBuf>,
    pub dry_run: bool,
}

impl DesignResult {
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn under_placed(&self) -> impl Iterator<Item = &DesignLine> {
        self.lines.iter().filter(|l| l.is_under_placed())
    }
}
