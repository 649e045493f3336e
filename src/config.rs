//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};
use clap::Parser;

use crate::{
    error::ConfigurationError,
    render::FULL_DASH_LENGTH,
    state::TimerConfig,
};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "ring-timer")]
#[command(about = "A countdown timer with a shrinking ring and a completion sound")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Countdown length in seconds
    #[arg(short, long, default_value = "15")]
    pub duration: u64,

    /// Remaining seconds at which the ring turns orange
    #[arg(long, default_value = "10")]
    pub warning: u64,

    /// Remaining seconds at which the ring turns red
    #[arg(long, default_value = "5")]
    pub alert: u64,

    /// Milliseconds between ticks
    #[arg(long, default_value = "1000")]
    pub tick_ms: u64,

    /// Full length of the ring's stroke
    #[arg(long, default_value_t = FULL_DASH_LENGTH)]
    pub dash_length: u32,

    /// Audio file played when the countdown ends (terminal bell if omitted)
    #[arg(long)]
    pub sound_file: Option<PathBuf>,

    /// Program used to play the sound file
    #[arg(long, default_value = "paplay")]
    pub player: String,

    /// Reset only after the player exits instead of right after launching it
    #[arg(long)]
    pub wait_for_sound: bool,

    /// Start counting down immediately
    #[arg(long)]
    pub autostart: bool,

    /// Run a single countdown without the HTTP server, then exit
    #[arg(long)]
    pub once: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build the validated timer configuration
    pub fn timer_config(&self) -> Result<TimerConfig, ConfigurationError> {
        TimerConfig::new(self.duration, self.warning, self.alert)?
            .with_tick_interval(Duration::from_millis(self.tick_ms))?
            .with_full_dash_length(self.dash_length)
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_default_timer() {
        let config = Config::try_parse_from(["ring-timer"]).unwrap();
        assert_eq!(config.timer_config().unwrap(), TimerConfig::default());
        assert_eq!(config.address(), "0.0.0.0:20554");
        assert_eq!(config.log_level(), "info");
        assert!(config.sound_file.is_none());
    }

    #[test]
    fn flags_reach_timer_config() {
        let config = Config::try_parse_from([
            "ring-timer", "-d", "90", "--warning", "30", "--alert", "10", "--tick-ms", "500", "-v",
        ])
        .unwrap();
        let timer = config.timer_config().unwrap();
        assert_eq!(timer.total_duration(), 90);
        assert_eq!(timer.warning_threshold(), 30);
        assert_eq!(timer.alert_threshold(), 10);
        assert_eq!(timer.tick_interval(), Duration::from_millis(500));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn invalid_thresholds_fail() {
        let config = Config::try_parse_from(["ring-timer", "--warning", "3", "--alert", "4"]).unwrap();
        assert_eq!(
            config.timer_config(),
            Err(ConfigurationError::ThresholdOrder { alert: 4, warning: 3 })
        );
    }
}
