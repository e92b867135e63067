//! Form submission: field mapping, per-form controllers and page wiring

mod controller;
mod mapper;
mod payload;
mod wiring;

pub use controller::{ConfigurationError, FormKind, SubmissionController, SubmissionResult, UiState};
pub use mapper::{map_admission, map_contact, MissingField, ADMISSION_FIELDS, CONTACT_FIELDS};
pub use payload::{AdmissionPayload, ContactPayload, Payload, RawFormInput};
pub use wiring::{wire_page, PageBindings, PageElements};
