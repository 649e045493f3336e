//! Countdown state machine
//!
//! ```text
//!            start            pause
//!   Idle ──────────► Running ───────► Paused
//!    ▲                 │  ▲            │
//!    │                 │  └── resume ──┘
//!    │   remaining ≤ 0 ▼
//!    └──── sound ──── Finished
//!        completion
//! ```
//!
//! `reset` returns to `Idle` from any state. The machine never sleeps or
//! spawns anything itself: it only reports whether its tick schedule should
//! be armed (`is_ticking`) and leaves delivering ticks to the driver.

use tokio::sync::oneshot;
use tracing::{debug, info};

use super::{TimerConfig, TimerSnapshot, TimerState, TimerStatus};
use crate::{
    render::{classify, format_time_left, stroke_dash_array, time_fraction},
    services::{Completion, DisplaySurface, SoundDevice},
};

/// Single countdown timer driving a display surface and a sound device
#[derive(Debug)]
pub struct TimerStateMachine<D, S> {
    config: TimerConfig,
    state: TimerState,
    ticking: bool,
    pending_completion: Option<oneshot::Receiver<()>>,
    display: D,
    sound: S,
}

impl<D: DisplaySurface, S: SoundDevice> TimerStateMachine<D, S> {
    /// Create an idle timer and render its initial state
    pub fn new(config: TimerConfig, display: D, sound: S) -> Self {
        let state = TimerState::new(config.total_duration());
        let mut machine = Self {
            config,
            state,
            ticking: false,
            pending_completion: None,
            display,
            sound,
        };
        machine.publish();
        machine
    }

    /// Begin counting down. Ignored unless idle.
    pub fn start(&mut self) {
        match self.state.status() {
            TimerStatus::Idle => {
                info!("Starting countdown of {}s", self.config.total_duration());
                self.state.set_status(TimerStatus::Running);
                self.ticking = true;
            }
            status => debug!("Ignoring start while {}", status.as_str()),
        }
    }

    /// Stop processing ticks. The tick schedule stays armed.
    pub fn pause(&mut self) {
        if self.state.is_running() {
            info!("Pausing countdown at {}s remaining", self.state.remaining());
            self.state.set_status(TimerStatus::Paused);
        } else {
            debug!("Ignoring pause while {}", self.state.status().as_str());
        }
    }

    /// Continue a paused countdown
    pub fn resume(&mut self) {
        if self.state.status() == TimerStatus::Paused {
            info!("Resuming countdown at {}s remaining", self.state.remaining());
            self.state.set_status(TimerStatus::Running);
        } else {
            debug!("Ignoring resume while {}", self.state.status().as_str());
        }
    }

    /// Return to the initial idle state from anywhere
    pub fn reset(&mut self) {
        debug!("Resetting timer from {}", self.state.status().as_str());
        self.cancel_schedule();
        self.pending_completion = None;
        self.state.clear();
        self.publish();
    }

    /// Process one scheduled tick
    pub fn tick(&mut self) {
        if !self.state.is_running() {
            return;
        }

        let remaining = self.state.advance();
        self.publish();

        if remaining <= 0 {
            info!("Countdown finished after {}s", self.state.elapsed());
            self.cancel_schedule();
            self.state.set_status(TimerStatus::Finished);

            let (done, rx) = Completion::channel();
            self.pending_completion = Some(rx);
            self.sound.play(done);
        }
    }

    /// Reset if the sound device has signalled completion.
    ///
    /// Returns `true` when the timer went back to idle.
    pub fn poll_completion(&mut self) -> bool {
        let Some(rx) = self.pending_completion.as_mut() else {
            return false;
        };
        match rx.try_recv() {
            Ok(()) | Err(oneshot::error::TryRecvError::Closed) => {
                self.finish_completion();
                true
            }
            Err(oneshot::error::TryRecvError::Empty) => false,
        }
    }

    /// Wait for the sound device to signal, then reset.
    ///
    /// Never resolves while no completion is pending.
    pub async fn completed(&mut self) {
        match self.pending_completion.as_mut() {
            // A dropped completion token counts as done
            Some(rx) => {
                let _ = rx.await;
            }
            None => std::future::pending::<()>().await,
        }
        self.finish_completion();
    }

    fn finish_completion(&mut self) {
        self.pending_completion = None;
        if self.state.status() == TimerStatus::Finished {
            info!("Completion sound done, resetting timer");
            self.reset();
        }
    }

    fn cancel_schedule(&mut self) {
        if self.ticking {
            debug!("Cancelling tick schedule");
            self.ticking = false;
        }
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.display.set_label(&snapshot.label);
        self.display.set_arc_dash_array(&snapshot.dash_array);
        self.display.set_severity_class(snapshot.severity);
    }

    /// Whether the driver should keep delivering ticks
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Whether a sound completion is outstanding
    pub fn awaiting_completion(&self) -> bool {
        self.pending_completion.is_some()
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn status(&self) -> TimerStatus {
        self.state.status()
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    /// Compute the current display outputs
    pub fn snapshot(&self) -> TimerSnapshot {
        let remaining = self.state.remaining();
        let severity = classify(remaining, &self.config);
        let fraction = time_fraction(remaining, self.config.total_duration());
        TimerSnapshot {
            status: self.state.status(),
            elapsed: self.state.elapsed(),
            remaining,
            label: format_time_left(remaining.max(0) as u64),
            dash_array: stroke_dash_array(fraction, self.config.full_dash_length()),
            severity,
            class_name: severity.class_name().to_string(),
        }
    }
}
