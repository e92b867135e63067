//! Attaching submission controllers when a page loads

use super::controller::{ConfigurationError, FormKind, SubmissionController};
use crate::api::SubmissionApi;
use crate::notify::Notify;
use crate::state::{FormElement, Page};
use std::sync::{Arc, Mutex};

/// Forms present on the loaded page
pub struct PageElements<F> {
    pub admission_form: Option<Arc<Mutex<F>>>,
    pub contact_form: Option<Arc<Mutex<F>>>,
}

impl<F> Default for PageElements<F> {
    fn default() -> Self {
        Self {
            admission_form: None,
            contact_form: None,
        }
    }
}

/// Controllers attached to the loaded page
pub struct PageBindings<A, N, F> {
    pub admission: Option<SubmissionController<A, N, F>>,
    pub contact: Option<SubmissionController<A, N, F>>,
}

impl<A, N, F> Default for PageBindings<A, N, F> {
    fn default() -> Self {
        Self {
            admission: None,
            contact: None,
        }
    }
}

impl<A, N, F> PageBindings<A, N, F> {
    pub fn controller(&self, kind: FormKind) -> Option<&SubmissionController<A, N, F>> {
        match kind {
            FormKind::Admission => self.admission.as_ref(),
            FormKind::Contact => self.contact.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.admission.is_none() && self.contact.is_none()
    }
}

/// Attach the controllers that belong on `page`.
///
/// The admission controller attaches only on the admissions page and the
/// contact controller only on the contact page. A form missing from its page
/// is not an error; a contact form without its inputs is.
pub fn wire_page<A, N, F>(
    page: Page,
    elements: PageElements<F>,
    api: &Arc<A>,
    notifier: &Arc<N>,
) -> Result<PageBindings<A, N, F>, ConfigurationError>
where
    A: SubmissionApi + 'static,
    N: Notify + 'static,
    F: FormElement,
{
    let mut bindings = PageBindings::default();

    match (page, elements.admission_form) {
        (Page::Admissions, Some(form)) => {
            bindings.admission = Some(SubmissionController::attach(
                FormKind::Admission,
                Arc::clone(api),
                Arc::clone(notifier),
                form,
            )?);
            tracing::info!("Admission form found and handler attached");
        }
        (Page::Admissions, None) => tracing::debug!("No admission form on the admissions page"),
        _ => {}
    }

    match (page, elements.contact_form) {
        (Page::Contact, Some(form)) => {
            bindings.contact = Some(SubmissionController::attach(
                FormKind::Contact,
                Arc::clone(api),
                Arc::clone(notifier),
                form,
            )?);
            tracing::info!("Contact form found and handler attached");
        }
        (Page::Contact, None) => tracing::debug!("No contact form on the contact page"),
        _ => {}
    }

    Ok(bindings)
}
