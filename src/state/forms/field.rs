//! Form field value objects

/// A single named input with its label and current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Input name used when collecting the form's values
    pub name: String,
    pub label: String,
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            is_multiline,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
