//! The form surface a submission controller works against

use crate::submission::RawFormInput;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A form's submit button: its visible label and whether it responds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    label: String,
    enabled: bool,
}

impl SubmitControl {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            enabled: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disable and relabel the control, returning the label it had before
    pub fn begin_busy(&mut self, busy_label: &str) -> String {
        self.enabled = false;
        std::mem::replace(&mut self.label, busy_label.to_string())
    }

    /// Re-enable the control with the given label
    pub fn restore(&mut self, label: String) {
        self.label = label;
        self.enabled = true;
    }
}

/// Submit event delivered to a controller by the host
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the host from running its own submit handling
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A form whose values can be read and reset by a controller
pub trait FormElement: Send + 'static {
    /// Every named input and its current value
    fn named_values(&self) -> RawFormInput;

    /// Value of a single input, `None` if the form has no such input
    fn lookup(&self, name: &str) -> Option<String>;

    /// Return every input to its empty state
    fn reset(&mut self);

    fn submit_control(&self) -> &SubmitControl;

    fn submit_control_mut(&mut self) -> &mut SubmitControl;
}

/// Lock a shared form, recovering the data if a holder panicked
pub fn lock_form<F>(form: &Mutex<F>) -> MutexGuard<'_, F> {
    form.lock().unwrap_or_else(PoisonError::into_inner)
}
