//! Field mapping from raw form input to API payloads

use super::payload::{AdmissionPayload, ContactPayload, RawFormInput};
use thiserror::Error;

/// Admission form input names and the API field each one becomes
pub const ADMISSION_FIELDS: [(&str, &str); 27] = [
    ("surname", "surname"),
    ("firstname", "first_name"),
    ("othernames", "other_names"),
    ("dob", "date_of_birth"),
    ("age", "age"),
    ("gender", "gender"),
    ("placeofbirth", "place_of_birth"),
    ("regionofbirth", "region_of_birth"),
    ("hometown", "home_town"),
    ("regionhometown", "region_of_home_town"),
    ("lastschool", "last_school_attended"),
    ("schoollocation", "location_of_last_school"),
    ("previousclass", "class_before_admission"),
    ("religion", "religious_denomination"),
    ("hobbies", "hobbies"),
    ("disability", "disability_or_allergy"),
    ("fathername", "father_name"),
    ("mothername", "mother_name"),
    ("fatheroccupation", "father_occupation"),
    ("motheroccupation", "mother_occupation"),
    ("fathercontact", "father_contact"),
    ("mothercontact", "mother_contact"),
    ("fatheremail", "father_email"),
    ("motheremail", "mother_email"),
    ("postal", "postal_address"),
    ("residence", "place_of_residence"),
    ("housenumber", "house_number"),
];

/// Contact form inputs, looked up by name
pub const CONTACT_FIELDS: [&str; 3] = ["name", "email", "message"];

/// A required input was not present on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("missing required field `{0}`")]
pub struct MissingField(pub &'static str);

/// Map admission form input to the API payload
pub fn map_admission(raw: &RawFormInput) -> AdmissionPayload {
    let text = |name: &str| raw.get(name).map(str::to_owned);

    AdmissionPayload {
        surname: text("surname"),
        first_name: text("firstname"),
        other_names: text("othernames"),
        date_of_birth: text("dob"),
        age: raw.get("age").and_then(parse_age),
        gender: raw
            .get("gender")
            .filter(|g| !g.is_empty())
            .map(str::to_lowercase),
        place_of_birth: text("placeofbirth"),
        region_of_birth: text("regionofbirth"),
        home_town: text("hometown"),
        region_of_home_town: text("regionhometown"),
        last_school_attended: text("lastschool"),
        location_of_last_school: text("schoollocation"),
        class_before_admission: text("previousclass"),
        religious_denomination: text("religion"),
        hobbies: text("hobbies"),
        disability_or_allergy: text("disability"),
        father_name: text("fathername"),
        mother_name: text("mothername"),
        father_occupation: text("fatheroccupation"),
        mother_occupation: text("motheroccupation"),
        father_contact: text("fathercontact"),
        mother_contact: text("mothercontact"),
        father_email: text("fatheremail"),
        mother_email: text("motheremail"),
        postal_address: text("postal"),
        place_of_residence: text("residence"),
        house_number: text("housenumber"),
    }
}

/// Map contact form input to the API payload
pub fn map_contact(raw: &RawFormInput) -> Result<ContactPayload, MissingField> {
    let field = |name: &'static str| raw.get(name).map(str::to_owned).ok_or(MissingField(name));

    Ok(ContactPayload {
        name: field("name")?,
        email: field("email")?,
        message: field("message")?,
    })
}

/// Read a whole number the way a lenient integer parse does.
///
/// Leading whitespace and a sign are accepted, digits are read up to the
/// first non-digit. Negative, empty or overflowing input gives `None`.
pub fn parse_age(raw: &str) -> Option<u32> {
    let s = raw.trim_start();
    let (negative, rest) = match s.chars().next() {
        Some('-') => (true, &s[1..]),
        Some('+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: u32 = rest[..end].parse().ok()?;

    if negative && value != 0 {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn full_admission_input() -> RawFormInput {
        ADMISSION_FIELDS
            .iter()
            .map(|(input, _)| {
                let value = match *input {
                    "age" => "8".to_string(),
                    "gender" => "Female".to_string(),
                    other => format!("value-{other}"),
                };
                (*input, value)
            })
            .collect()
    }

    #[test]
    fn test_parse_age_plain_numbers() {
        assert_eq!(parse_age("7"), Some(7));
        assert_eq!(parse_age("0"), Some(0));
        assert_eq!(parse_age("  12"), Some(12));
        assert_eq!(parse_age("+5"), Some(5));
    }

    #[test]
    fn test_parse_age_takes_leading_digits() {
        assert_eq!(parse_age("12 years"), Some(12));
        assert_eq!(parse_age("7.5"), Some(7));
    }

    #[test]
    fn test_parse_age_rejects_non_numeric() {
        assert_eq!(parse_age(""), None);
        assert_eq!(parse_age("   "), None);
        assert_eq!(parse_age("seven"), None);
        assert_eq!(parse_age("NaN"), None);
        assert_eq!(parse_age("-"), None);
        assert_eq!(parse_age("x12"), None);
    }

    #[test]
    fn test_parse_age_rejects_negative() {
        assert_eq!(parse_age("-3"), None);
        assert_eq!(parse_age(" -10"), None);
        assert_eq!(parse_age("-0"), Some(0));
    }

    #[test]
    fn test_parse_age_rejects_overflow() {
        assert_eq!(parse_age("99999999999999999999"), None);
    }

    #[test]
    fn test_age_is_integer_or_null_in_json() {
        for input in ["8", "", "abc", "-4", "3e2", "٣"] {
            let raw: RawFormInput = [("age", input)].into_iter().collect();
            let json = serde_json::to_value(map_admission(&raw)).unwrap();
            let age = &json["age"];
            assert!(
                age.is_null() || age.is_u64(),
                "age for {input:?} mapped to {age}"
            );
        }
    }

    #[test]
    fn test_gender_is_lower_cased() {
        let raw: RawFormInput = [("gender", "MALE")].into_iter().collect();
        assert_eq!(map_admission(&raw).gender.as_deref(), Some("male"));
    }

    #[test]
    fn test_empty_gender_is_absent() {
        let raw: RawFormInput = [("gender", "")].into_iter().collect();
        let payload = map_admission(&raw);
        assert_eq!(payload.gender, None);

        let json = serde_json::to_value(payload).unwrap();
        assert!(json.get("gender").is_none());
    }

    #[test]
    fn test_missing_gender_is_absent() {
        let payload = map_admission(&RawFormInput::new());
        assert_eq!(payload.gender, None);
    }

    #[test]
    fn test_text_fields_pass_through_untrimmed() {
        let raw: RawFormInput = [("surname", "  MENSAH "), ("hobbies", "")]
            .into_iter()
            .collect();
        let payload = map_admission(&raw);
        assert_eq!(payload.surname.as_deref(), Some("  MENSAH "));
        assert_eq!(payload.hobbies.as_deref(), Some(""));
        assert_eq!(payload.first_name, None);
    }

    #[test]
    fn test_admission_mapping_is_total() {
        let json = serde_json::to_value(map_admission(&full_admission_input())).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), ADMISSION_FIELDS.len());
        for (input, api) in ADMISSION_FIELDS {
            let value = object
                .get(api)
                .unwrap_or_else(|| panic!("`{input}` was dropped (expected `{api}`)"));
            match input {
                "age" => assert_eq!(value, &serde_json::json!(8)),
                "gender" => assert_eq!(value, &serde_json::json!("female")),
                _ => assert_eq!(value, &serde_json::json!(format!("value-{input}"))),
            }
        }
    }

    #[test]
    fn test_admission_field_names_are_unique() {
        let inputs: HashSet<_> = ADMISSION_FIELDS.iter().map(|(i, _)| *i).collect();
        let apis: HashSet<_> = ADMISSION_FIELDS.iter().map(|(_, a)| *a).collect();
        assert_eq!(inputs.len(), ADMISSION_FIELDS.len());
        assert_eq!(apis.len(), ADMISSION_FIELDS.len());
    }

    #[test]
    fn test_unknown_inputs_are_ignored() {
        let raw: RawFormInput = [("csrfmiddlewaretoken", "abc"), ("surname", "ASANTE")]
            .into_iter()
            .collect();
        let json = serde_json::to_value(map_admission(&raw)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "surname": "ASANTE", "age": null })
        );
    }

    #[test]
    fn test_map_contact_identity() {
        let raw: RawFormInput = [
            ("name", " Ama "),
            ("email", "AMA@EXAMPLE.COM"),
            ("message", "Hi\nthere"),
        ]
        .into_iter()
        .collect();

        let payload = map_contact(&raw).unwrap();
        assert_eq!(
            payload,
            ContactPayload {
                name: " Ama ".to_string(),
                email: "AMA@EXAMPLE.COM".to_string(),
                message: "Hi\nthere".to_string(),
            }
        );
    }

    #[test]
    fn test_map_contact_missing_field() {
        let raw: RawFormInput = [("name", "Ama"), ("message", "Hi")].into_iter().collect();
        assert_eq!(map_contact(&raw), Err(MissingField("email")));
    }

    #[test]
    fn test_map_contact_keeps_empty_values() {
        let raw: RawFormInput = CONTACT_FIELDS.iter().map(|f| (*f, "")).collect();
        let payload = map_contact(&raw).unwrap();
        assert_eq!(payload, ContactPayload::default());
    }
}
