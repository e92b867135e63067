//! Form state management and the admission/contact form definitions

use super::element::{FormElement, SubmitControl};
use super::field::FormField;
use crate::submission::RawFormInput;

/// Admission form inputs: (name, label, multiline)
const ADMISSION_INPUTS: &[(&str, &str, bool)] = &[
    // Pupil's data
    ("surname", "Surname (BLOCK LETTERS)", false),
    ("firstname", "First Name", false),
    ("othernames", "Other Names", false),
    ("dob", "Date of Birth (YYYY-MM-DD)", false),
    ("age", "Age", false),
    ("gender", "Gender (Male/Female)", false),
    ("placeofbirth", "Place of Birth", false),
    ("regionofbirth", "Region of Birth", false),
    ("hometown", "Home Town", false),
    ("regionhometown", "Region of Home Town", false),
    ("lastschool", "Last School Attended", false),
    ("schoollocation", "Location of Last School", false),
    ("previousclass", "Class Before Admission", false),
    ("religion", "Religious Denomination", false),
    ("hobbies", "Hobbies or Interests", true),
    ("disability", "Disability or Allergy", true),
    // Parent/guardian data
    ("fathername", "Father's Name", false),
    ("mothername", "Mother's Name", false),
    ("fatheroccupation", "Father's Occupation", false),
    ("motheroccupation", "Mother's Occupation", false),
    ("fathercontact", "Father's Contact", false),
    ("mothercontact", "Mother's Contact", false),
    ("fatheremail", "Father's Email", false),
    ("motheremail", "Mother's Email", false),
    ("postal", "Postal Address", true),
    ("residence", "Place of Residence", false),
    ("housenumber", "House Number", false),
];

const CONTACT_INPUTS: &[(&str, &str, bool)] = &[
    ("name", "Name", false),
    ("email", "Email", false),
    ("message", "Message", true),
];

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// An editable form: its inputs, keyboard focus, and submit button
#[derive(Debug, Clone)]
pub struct FormModel {
    fields: Vec<FormField>,
    pub active_field_index: usize,
    submit: SubmitControl,
}

impl FormModel {
    pub fn new(fields: Vec<FormField>, submit_label: &str) -> Self {
        Self {
            fields,
            active_field_index: 0,
            submit: SubmitControl::new(submit_label),
        }
    }

    /// The pupil admission application form
    pub fn admission() -> Self {
        Self::from_inputs(ADMISSION_INPUTS, "Submit Application")
    }

    /// The contact message form
    pub fn contact() -> Self {
        Self::from_inputs(CONTACT_INPUTS, "Send Message")
    }

    fn from_inputs(inputs: &[(&str, &str, bool)], submit_label: &str) -> Self {
        let fields = inputs
            .iter()
            .map(|(name, label, multiline)| FormField::text(name, label, *multiline))
            .collect();
        Self::new(fields, submit_label)
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(FormField::as_text)
    }

    /// Set an input's value; returns false if the form has no such input
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.set_text(value);
                true
            }
            None => false,
        }
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// Whether the active input accepts newlines
    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }
}

impl Form for FormModel {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // inputs, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}

impl FormElement for FormModel {
    fn named_values(&self) -> RawFormInput {
        self.fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
            .collect()
    }

    fn lookup(&self, name: &str) -> Option<String> {
        self.value(name).map(str::to_owned)
    }

    fn reset(&mut self) {
        self.fields.iter_mut().for_each(FormField::clear);
    }

    fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    fn submit_control_mut(&mut self) -> &mut SubmitControl {
        &mut self.submit
    }
}
