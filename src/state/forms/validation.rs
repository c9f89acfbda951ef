//! Validation rules for the resume form

use super::field::{Field, FormData};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Minimum digits a phone number must contain
pub const MIN_PHONE_DIGITS: usize = 10;

/// Per-field validation messages. A missing key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    messages: BTreeMap<Field, String>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: Field) {
        self.messages.remove(&field);
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.messages.keys().copied()
    }
}

/// Run every rule against `form` and collect the failures.
///
/// Rules are independent: a failing name does not stop email or phone
/// from being checked. Position and description are never rejected.
pub fn validate(form: &FormData) -> FormErrors {
    let mut errors = FormErrors::default();

    if form.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }

    if form.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_RE.is_match(&form.email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }

    if form.phone.trim().is_empty() {
        errors.insert(Field::Phone, "Phone number is required");
    } else if phone_digit_count(&form.phone) < MIN_PHONE_DIGITS {
        errors.insert(Field::Phone, "Phone number must be at least 10 digits");
    }

    errors
}

fn phone_digit_count(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}
