use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::ThresholdConfig;

/// Ordinal band of an additive axis score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn name(self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a score onto Low/Medium/High. Both cut points are inclusive upper bounds.
pub fn classify_level(score: i32, thresholds: &ThresholdConfig) -> Level {
    if score <= thresholds.low_max {
        Level::Low
    } else if score <= thresholds.medium_max {
        Level::Medium
    } else {
        Level::High
    }
}
