//! External collaborator module
//! 
//! This module contains the display surfaces the timer renders into and the
//! sound devices it plays when a countdown finishes.

pub mod display;
pub mod sound;

// Re-export main types
pub use display::*;
pub use sound::*;
