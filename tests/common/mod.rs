//! Recording doubles for the display and sound traits

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ring_timer::{
    services::{Completion, DisplaySurface, SoundDevice},
    SeverityLevel,
};

/// Everything a display has been told, in order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Rendered {
    pub labels: Vec<String>,
    pub dash_arrays: Vec<String>,
    pub levels: Vec<SeverityLevel>,
}

impl Rendered {
    pub fn label(&self) -> &str {
        self.labels.last().map(String::as_str).unwrap_or_default()
    }

    pub fn dash_array(&self) -> &str {
        self.dash_arrays.last().map(String::as_str).unwrap_or_default()
    }

    pub fn level(&self) -> Option<SeverityLevel> {
        self.levels.last().copied()
    }
}

/// Display that records into shared storage so tests can inspect it after
/// the machine has moved into a task
#[derive(Debug, Default, Clone)]
pub struct RecordingDisplay {
    pub rendered: Arc<Mutex<Rendered>>,
}

impl RecordingDisplay {
    pub fn snapshot(&self) -> Rendered {
        self.rendered.lock().unwrap().clone()
    }
}

impl DisplaySurface for RecordingDisplay {
    fn set_label(&mut self, text: &str) {
        self.rendered.lock().unwrap().labels.push(text.to_string());
    }

    fn set_arc_dash_array(&mut self, spec: &str) {
        self.rendered.lock().unwrap().dash_arrays.push(spec.to_string());
    }

    fn set_severity_class(&mut self, level: SeverityLevel) {
        self.rendered.lock().unwrap().levels.push(level);
    }
}

/// Sound device that counts plays and either completes right away or holds
/// the token for the test to release
#[derive(Debug, Default, Clone)]
pub struct RecordingSound {
    pub plays: Arc<Mutex<usize>>,
    pub held: Arc<Mutex<Option<Completion>>>,
    pub hold: bool,
}

impl RecordingSound {
    pub fn immediate() -> Self {
        Self::default()
    }

    pub fn holding() -> Self {
        Self { hold: true, ..Self::default() }
    }

    pub fn plays(&self) -> usize {
        *self.plays.lock().unwrap()
    }

    /// Signal the held completion, if any
    pub fn release(&self) -> bool {
        match self.held.lock().unwrap().take() {
            Some(done) => {
                done.signal();
                true
            }
            None => false,
        }
    }
}

impl SoundDevice for RecordingSound {
    fn play(&mut self, done: Completion) {
        *self.plays.lock().unwrap() += 1;
        if self.hold {
            *self.held.lock().unwrap() = Some(done);
        } else {
            done.signal();
        }
    }
}
