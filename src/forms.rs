//! Lead-generation form submissions.
//!
//! Forms are validated and acknowledged; nothing is stored. Every rule that
//! fails contributes one message, in field order, so a client can show them
//! all at once.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lenient;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Returns `true` if `email` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// `POST /api/contact` body. Absent or mistyped fields deserialize as empty.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub message: Option<String>,
    #[serde(deserialize_with = "lenient::truthy")]
    pub consent_to_privacy: bool,
}

impl ContactForm {
    /// Validation failures, empty when the form is acceptable.
    #[must_use]
    pub fn validation_errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if !has_min_chars(self.name.as_deref(), 2) {
            errors.push("Name required (min 2 chars)");
        }
        if !self.email.as_deref().is_some_and(is_valid_email) {
            errors.push("Valid email required");
        }
        if !has_min_chars(self.message.as_deref(), 1) {
            errors.push("Message required");
        }
        if !self.consent_to_privacy {
            errors.push("Privacy consent required");
        }
        errors
    }
}

/// `POST /api/demo-request` body. Absent or mistyped fields deserialize as empty.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DemoRequestForm {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient::truthy")]
    pub consent_to_privacy: bool,
}

impl DemoRequestForm {
    /// Validation failures, empty when the form is acceptable.
    #[must_use]
    pub fn validation_errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if !has_min_chars(self.name.as_deref(), 2) {
            errors.push("Name required");
        }
        if !self.email.as_deref().is_some_and(is_valid_email) {
            errors.push("Valid email required");
        }
        if !has_min_chars(self.company.as_deref(), 1) {
            errors.push("Company required");
        }
        if !self.consent_to_privacy {
            errors.push("Privacy consent required");
        }
        errors
    }
}

/// Acknowledgement returned for an accepted submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub id: String,
    pub message: &'static str,
}

impl Receipt {
    /// A receipt whose id is `{prefix}_{unix millis}`.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            id: format!("{prefix}_{}", Utc::now().timestamp_millis()),
            message: "Received",
        }
    }
}

fn has_min_chars(value: Option<&str>, min: usize) -> bool {
    value.is_some_and(|v| v.chars().count() >= min)
}
