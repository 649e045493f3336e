//! Background tasks module
//! 
//! This module contains the task that owns and ticks the countdown timer.

pub mod countdown;

// Re-export main types
pub use countdown::{spawn_timer, TimerCommand, TimerHandle};
