//! Consecutive axle group types for the bridge formula

use serde::{Deserialize, Serialize};

/// Axle count and outer-to-outer spacing of a consecutive axle group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BridgeFormulaInput {
    pub axle_count: u32,
    pub spacing_feet: f64,
}

impl BridgeFormulaInput {
    pub fn new(axle_count: u32, spacing_feet: f64) -> Self {
        Self {
            axle_count,
            spacing_feet,
        }
    }
}

/// Outcome of the bridge formula for one axle group
///
/// A single axle is not constrained by the formula at all, which is kept as
/// its own variant rather than encoded as zero or infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeLimit {
    NotApplicable,
    MaxWeight(f64),
}

impl BridgeLimit {
    /// Maximum weight rounded down to whole pounds
    pub fn floor_pounds(&self) -> Option<u32> {
        match self {
            BridgeLimit::NotApplicable => None,
            BridgeLimit::MaxWeight(pounds) => Some(pounds.floor().min(u32::MAX as f64) as u32),
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, BridgeLimit::MaxWeight(_))
    }
}
