//! Timer state structure and management

use serde::{Deserialize, Serialize};

use crate::render::SeverityLevel;

/// Lifecycle status of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
    Finished,
}

impl TimerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Finished => "finished",
        }
    }
}

/// Mutable countdown state owned by a single state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    total_duration: u64,
    elapsed: u64,
    status: TimerStatus,
}

impl TimerState {
    /// Create an idle state for a countdown of `total_duration` seconds
    pub fn new(total_duration: u64) -> Self {
        Self {
            total_duration,
            elapsed: 0,
            status: TimerStatus::Idle,
        }
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Seconds left, `total_duration - elapsed`
    ///
    /// `TimerConfig` caps the total at `i64::MAX` and ticks stop at zero, so
    /// both casts are lossless.
    pub fn remaining(&self) -> i64 {
        self.total_duration as i64 - self.elapsed as i64
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: TimerStatus) {
        self.status = status;
    }

    /// Advance by one second and return the new remaining time
    pub(crate) fn advance(&mut self) -> i64 {
        self.elapsed += 1;
        self.remaining()
    }

    /// Return to the initial idle state
    pub(crate) fn clear(&mut self) {
        self.elapsed = 0;
        self.status = TimerStatus::Idle;
    }

    /// Check if the countdown is progressing
    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }
}

/// Point-in-time view of a timer, published to watchers after every change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub status: TimerStatus,
    pub elapsed: u64,
    pub remaining: i64,
    pub label: String,
    pub dash_array: String,
    pub severity: SeverityLevel,
    pub class_name: String,
}
