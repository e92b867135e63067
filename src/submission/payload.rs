//! Raw form input and the canonical payloads sent to the API

use serde::Serialize;
use std::collections::BTreeMap;

/// Field values exactly as entered, keyed by input name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFormInput(BTreeMap<String, String>);

impl RawFormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawFormInput
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Admission application as accepted by `POST /admissions/`
///
/// Text fields missing from the form are left out of the JSON body. `age` is
/// always sent, as `null` when it could not be read as a whole number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdmissionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_town: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_of_home_town: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_school_attended: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_of_last_school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_before_admission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub religious_denomination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disability_or_allergy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_residence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
}

/// Contact message as accepted by `POST /contact/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A mapped payload ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Admission(AdmissionPayload),
    Contact(ContactPayload),
}
