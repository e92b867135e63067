//! Submission lifecycle for one form
//!
//! A controller turns a submit event into exactly one API call and exactly one
//! notification, keeping the form's submit control disabled while the call is
//! in flight.

use super::mapper::{map_admission, map_contact, MissingField, CONTACT_FIELDS};
use super::payload::{Payload, RawFormInput};
use crate::api::{ServerResponse, SubmissionApi};
use crate::notify::{Notify, Severity};
use crate::state::{lock_form, FormElement, SubmitEvent};
use std::fmt;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::task::JoinHandle;

/// Which of the site's forms a controller drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Admission,
    Contact,
}

impl FormKind {
    /// Submit button label while a request is in flight
    pub fn busy_label(&self) -> &'static str {
        match self {
            FormKind::Admission => "Submitting...",
            FormKind::Contact => "Sending...",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Admission => "Application submitted successfully! We will contact you soon.",
            FormKind::Contact => "Message sent successfully! We will get back to you soon.",
        }
    }

    fn extract<F: FormElement>(&self, form: &F) -> Result<Payload, MissingField> {
        match self {
            FormKind::Admission => Ok(Payload::Admission(map_admission(&form.named_values()))),
            FormKind::Contact => {
                let raw: RawFormInput = CONTACT_FIELDS
                    .iter()
                    .filter_map(|name| form.lookup(name).map(|value| (*name, value)))
                    .collect();
                map_contact(&raw).map(Payload::Contact)
            }
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Admission => write!(f, "admission"),
            FormKind::Contact => write!(f, "contact"),
        }
    }
}

/// A controller could not be attached to the form it was given
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("{form} form has no `{input}` input")]
    MissingInput { form: FormKind, input: &'static str },
}

/// Per-form UI state, mirrored by the submit control's enablement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Submitting,
}

/// Outcome of one submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    Success(ServerResponse),
    Failure(String),
}

/// Drives one form through `Idle -> Submitting -> Idle`
pub struct SubmissionController<A, N, F> {
    kind: FormKind,
    api: Arc<A>,
    notifier: Arc<N>,
    form: Arc<Mutex<F>>,
}

impl<A, N, F> Clone for SubmissionController<A, N, F> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            api: Arc::clone(&self.api),
            notifier: Arc::clone(&self.notifier),
            form: Arc::clone(&self.form),
        }
    }
}

impl<A, N, F> SubmissionController<A, N, F>
where
    A: SubmissionApi + 'static,
    N: Notify + 'static,
    F: FormElement,
{
    /// Attach to a form, checking it has the inputs this kind reads
    pub fn attach(
        kind: FormKind,
        api: Arc<A>,
        notifier: Arc<N>,
        form: Arc<Mutex<F>>,
    ) -> Result<Self, ConfigurationError> {
        if kind == FormKind::Contact {
            let element = lock_form(&form);
            if let Some(input) = CONTACT_FIELDS
                .into_iter()
                .find(|name| element.lookup(name).is_none())
            {
                return Err(ConfigurationError::MissingInput { form: kind, input });
            }
        }

        Ok(Self {
            kind,
            api,
            notifier,
            form,
        })
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn state(&self) -> UiState {
        if lock_form(&self.form).submit_control().is_enabled() {
            UiState::Idle
        } else {
            UiState::Submitting
        }
    }

    /// Handle a submit event.
    ///
    /// The event's default action is always prevented. Returns the in-flight
    /// request, or `None` if nothing was sent (control disabled, or the form
    /// could not be read).
    pub fn on_submit(&self, event: &mut SubmitEvent) -> Option<JoinHandle<SubmissionResult>> {
        event.prevent_default();

        let (payload, original_label) = {
            let mut form = lock_form(&self.form);
            if !form.submit_control().is_enabled() {
                tracing::debug!("Ignoring {} submit while a request is in flight", self.kind);
                return None;
            }

            let payload = match self.kind.extract(&*form) {
                Ok(payload) => payload,
                Err(err) => {
                    drop(form);
                    tracing::warn!("Cannot read {} form: {err}", self.kind);
                    self.notifier
                        .notify(&format!("Error: {err}"), Severity::Error);
                    return None;
                }
            };

            let original_label = form.submit_control_mut().begin_busy(self.kind.busy_label());
            (payload, original_label)
        };

        tracing::debug!(payload = ?payload, "Submitting {} form", self.kind);

        let busy = BusyGuard {
            form: Arc::clone(&self.form),
            label: original_label,
        };
        let kind = self.kind;
        let api = Arc::clone(&self.api);
        let notifier = Arc::clone(&self.notifier);
        let form = Arc::clone(&self.form);

        Some(tokio::spawn(async move {
            let _busy = busy;

            let result = match &payload {
                Payload::Admission(p) => api.submit_admission(p).await,
                Payload::Contact(p) => api.submit_contact(p).await,
            };

            match result {
                Ok(response) => {
                    let receipt = response.receipt();
                    tracing::info!(id = ?receipt.id, status = ?receipt.status, "{kind} form submitted");
                    notifier.notify(kind.success_message(), Severity::Success);
                    lock_form(&form).reset();
                    SubmissionResult::Success(response)
                }
                Err(err) => {
                    tracing::warn!(status = ?err.status(), "{kind} submission failed: {err}");
                    let message = err.user_message();
                    notifier.notify(&format!("Error: {message}"), Severity::Error);
                    SubmissionResult::Failure(message)
                }
            }
        }))
    }
}

/// Restores the submit control when the request finishes, however it ends
struct BusyGuard<F: FormElement> {
    form: Arc<Mutex<F>>,
    label: String,
}

impl<F: FormElement> Drop for BusyGuard<F> {
    fn drop(&mut self) {
        let label = std::mem::take(&mut self.label);
        lock_form(&self.form).submit_control_mut().restore(label);
    }
}
