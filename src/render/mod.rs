//! Pure display computations
//!
//! Everything in this module is a total function of the remaining time and
//! the timer configuration. The state machine calls into these on every tick
//! and pushes the results to the display surface.

pub mod arc;
pub mod format;
pub mod severity;

// Re-export main functions
pub use arc::{stroke_dash_array, time_fraction, FULL_DASH_LENGTH};
pub use format::format_time_left;
pub use severity::{classify, SeverityLevel};
