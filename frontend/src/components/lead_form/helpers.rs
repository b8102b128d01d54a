//! Validation rules for the capture form, kept free of DOM types so they
//! can be unit-tested off the browser.

use regex::Regex;

/// Per-field validation messages. `None` renders nothing under the field.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub name: Option<String>,
    pub consent: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.consent.is_none()
    }
}

/// Mirrors the server-side intake rules: email shape, a name of at least
/// two characters, and explicit consent. Inputs are trimmed before
/// checking, matching what gets submitted.
pub fn validate(email: &str, name: &str, consent: bool) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let email = email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap().is_match(email) {
        errors.email = Some("Invalid email format".to_string());
    }

    let name = name.trim();
    if name.is_empty() {
        errors.name = Some("Name is required".to_string());
    } else if name.chars().count() < 2 {
        errors.name = Some("Name must be at least 2 characters".to_string());
    }

    if !consent {
        errors.consent = Some("You must agree to receive emails to continue".to_string());
    }

    errors
}
