//! Ring Timer - A countdown timer rendered as a shrinking ring
//! 
//! This library provides the countdown state machine, the pure functions it
//! uses to compute the label, ring geometry and color level, the display and
//! sound collaborator traits, and an HTTP API to drive a timer.

pub mod api;
pub mod config;
pub mod error;
pub mod render;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigurationError, TimerError};
pub use render::SeverityLevel;
pub use state::{AppState, TimerConfig, TimerStateMachine, TimerStatus};
pub use api::create_router;
pub use tasks::{spawn_timer, TimerHandle};
pub use utils::signals::shutdown_signal;
