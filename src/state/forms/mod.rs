//! Form domain layer
//!
//! Editable form models and the element surface submission controllers
//! read from and write to.

mod element;
mod field;
mod form_state;

pub use element::{lock_form, FormElement, SubmitControl, SubmitEvent};
pub use field::FormField;
pub use form_state::{Form, FormModel};
