//! Display surfaces the timer renders into

use tracing::{debug, info};

use crate::render::SeverityLevel;

/// Rendering target for a timer.
///
/// The state machine pushes the label, the ring's dash array and the
/// severity level after every change. Implementations must keep exactly one
/// severity class active at a time.
pub trait DisplaySurface {
    /// Set the visible time text
    fn set_label(&mut self, text: &str);

    /// Set the ring's `stroke-dasharray` value, `"{visible} {full}"`
    fn set_arc_dash_array(&mut self, spec: &str);

    /// Apply the class for `level`, removing the other two
    fn set_severity_class(&mut self, level: SeverityLevel);
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for Box<T> {
    fn set_label(&mut self, text: &str) {
        (**self).set_label(text);
    }

    fn set_arc_dash_array(&mut self, spec: &str) {
        (**self).set_arc_dash_array(spec);
    }

    fn set_severity_class(&mut self, level: SeverityLevel) {
        (**self).set_severity_class(level);
    }
}

/// Display that renders the timer into the log stream
#[derive(Debug, Default)]
pub struct LogDisplay {
    label: String,
    dash_array: String,
    class: Option<SeverityLevel>,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently applied severity class, if any has been set
    pub fn class(&self) -> Option<SeverityLevel> {
        self.class
    }
}

impl DisplaySurface for LogDisplay {
    fn set_label(&mut self, text: &str) {
        if self.label != text {
            info!("Time left: {}", text);
            self.label = text.to_string();
        }
    }

    fn set_arc_dash_array(&mut self, spec: &str) {
        debug!("Ring dash array: {}", spec);
        self.dash_array = spec.to_string();
    }

    fn set_severity_class(&mut self, level: SeverityLevel) {
        if self.class != Some(level) {
            if let Some(previous) = self.class {
                debug!("Removing ring class {}", previous.class_name());
            }
            info!("Ring color changed to {} ({})", level.class_name(), level);
            self.class = Some(level);
        }
    }
}
