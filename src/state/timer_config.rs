//! Immutable timer configuration

use std::time::Duration;

use serde::Serialize;
use tracing::warn;

use crate::{error::ConfigurationError, render::FULL_DASH_LENGTH};

/// Default countdown length in seconds
pub const DEFAULT_DURATION_SECS: u64 = 15;
/// Default warning threshold in seconds
pub const DEFAULT_WARNING_SECS: u64 = 10;
/// Default alert threshold in seconds
pub const DEFAULT_ALERT_SECS: u64 = 5;
/// Largest accepted duration or threshold, so remaining time fits an `i64`
pub const MAX_DURATION_SECS: u64 = i64::MAX as u64;
/// Default tick period
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Validated configuration for one timer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerConfig {
    total_duration: u64,
    warning_threshold: u64,
    alert_threshold: u64,
    #[serde(with = "millis")]
    tick_interval: Duration,
    full_dash_length: u32,
}

impl TimerConfig {
    /// Create a configuration with the default tick interval and ring length
    pub fn new(
        total_duration: u64,
        warning_threshold: u64,
        alert_threshold: u64,
    ) -> Result<Self, ConfigurationError> {
        let config = Self {
            total_duration,
            warning_threshold,
            alert_threshold,
            tick_interval: DEFAULT_TICK_INTERVAL,
            full_dash_length: FULL_DASH_LENGTH,
        };
        config.validate()?;

        if warning_threshold >= total_duration {
            warn!(
                "Warning threshold {}s is not below total duration {}s, timer starts in {} level",
                warning_threshold,
                total_duration,
                if alert_threshold >= total_duration { "alert" } else { "warning" }
            );
        }
        Ok(config)
    }

    /// Replace the tick interval
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Result<Self, ConfigurationError> {
        self.tick_interval = tick_interval;
        self.validate()?;
        Ok(self)
    }

    /// Replace the full ring length used for the dash array
    pub fn with_full_dash_length(mut self, full_dash_length: u32) -> Result<Self, ConfigurationError> {
        self.full_dash_length = full_dash_length;
        self.validate()?;
        Ok(self)
    }

    /// Check the configuration invariants.
    ///
    /// Thresholds at or above the total duration are accepted: the timer then
    /// starts out in the warning or alert level.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.total_duration == 0 {
            return Err(ConfigurationError::ZeroDuration);
        }
        for (field, value) in [
            ("total duration", self.total_duration),
            ("warning threshold", self.warning_threshold),
        ] {
            if value > MAX_DURATION_SECS {
                return Err(ConfigurationError::TooLarge { field, value, max: MAX_DURATION_SECS });
            }
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigurationError::ZeroTickInterval);
        }
        if self.full_dash_length == 0 {
            return Err(ConfigurationError::ZeroDashLength);
        }
        if self.alert_threshold >= self.warning_threshold {
            return Err(ConfigurationError::ThresholdOrder {
                alert: self.alert_threshold,
                warning: self.warning_threshold,
            });
        }
        Ok(())
    }

    pub fn total_duration(&self) -> u64 {
        self.total_duration
    }

    pub fn warning_threshold(&self) -> u64 {
        self.warning_threshold
    }

    pub fn alert_threshold(&self) -> u64 {
        self.alert_threshold
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn full_dash_length(&self) -> u32 {
        self.full_dash_length
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            total_duration: DEFAULT_DURATION_SECS,
            warning_threshold: DEFAULT_WARNING_SECS,
            alert_threshold: DEFAULT_ALERT_SECS,
            tick_interval: DEFAULT_TICK_INTERVAL,
            full_dash_length: FULL_DASH_LENGTH,
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }
}
