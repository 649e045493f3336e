//! Error types for the timer core

use thiserror::Error;

/// Invalid timer configuration, raised once at construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("total duration must be at least one second")]
    ZeroDuration,
    #[error("{field} of {value}s exceeds the maximum of {max}s")]
    TooLarge { field: &'static str, value: u64, max: u64 },
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("full dash length must be greater than zero")]
    ZeroDashLength,
    #[error("alert threshold ({alert}s) must be below warning threshold ({warning}s)")]
    ThresholdOrder { alert: u64, warning: u64 },
}

/// Failure talking to a running timer task
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("timer task is no longer running")]
    Closed,
}
