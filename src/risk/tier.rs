use std::fmt;

use serde::{Deserialize, Serialize};

pub const MEDIUM_TIER_FLOOR: f64 = 0.3;
pub const HIGH_TIER_FLOOR: f64 = 0.7;

/// Discretized risk bucket. Also used as the weight of a reason record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Lower bounds are inclusive: exactly 0.3 is medium, exactly 0.7 is high.
    pub fn from_probability(probability: f64) -> Self {
        if probability < MEDIUM_TIER_FLOOR {
            Self::Low
        } else if probability < HIGH_TIER_FLOOR {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
