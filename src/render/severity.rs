//! Ring color classification

use serde::{Deserialize, Serialize};

use crate::state::TimerConfig;

/// Severity of the remaining time, mapped to the ring's color class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Info,
    Warning,
    Alert,
}

impl SeverityLevel {
    /// Color class applied to the ring path
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Info => "green",
            Self::Warning => "orange",
            Self::Alert => "red",
        }
    }
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Alert => "alert",
        };
        f.write_str(name)
    }
}

/// Classify remaining seconds against the configured thresholds.
///
/// Checked most severe first; a value equal to a threshold lands in the
/// more severe bucket.
pub fn classify(remaining: i64, config: &TimerConfig) -> SeverityLevel {
    if remaining <= config.alert_threshold() as i64 {
        SeverityLevel::Alert
    } else if remaining <= config.warning_threshold() as i64 {
        SeverityLevel::Warning
    } else {
        SeverityLevel::Info
    }
}
