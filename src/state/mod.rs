//! State management module
//! 
//! This module contains the timer configuration, its mutable state, the
//! countdown state machine and the shared application state.

pub mod app_state;
pub mod machine;
pub mod timer_config;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use machine::TimerStateMachine;
pub use timer_config::TimerConfig;
pub use timer_state::{TimerSnapshot, TimerState, TimerStatus};
