use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::constants::{ALREADY_SENDING_ERROR, SENDING_LABEL};
use crate::validation::*;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(custom = "validate_name")]
    pub name: String,
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(custom = "validate_message")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CallbackRequest {
    #[validate(custom = "validate_name")]
    pub name: String,
    #[validate(custom = "validate_phone")]
    pub phone: String,
}

/// The services page form: a quote request tied to one service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ServiceEnquiry {
    #[validate(custom = "validate_name")]
    pub name: String,
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(custom = "validate_phone")]
    pub phone: String,
    #[validate(custom = "validate_service")]
    pub service: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewsletterSignup {
    #[validate(custom = "validate_email")]
    pub email: String,
}

/// First message per invalid field, keyed by field name.
pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, list)| list.first().map(|e| (field.to_string(), error_message(e))))
        .collect()
}

/// Validates a single field of `form`, for blur/input feedback.
pub fn field_error<T: Validate>(form: &T, field: &str) -> Option<String> {
    form.validate()
        .err()
        .and_then(|errors| field_errors(&errors).remove(field))
}

#[derive(Debug)]
pub enum SubmitError {
    Invalid(ValidationErrors),
    AlreadySending,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(errors) => write!(f, "{} field(s) need attention", errors.field_errors().len()),
            Self::AlreadySending => f.write_str(ALREADY_SENDING_ERROR),
        }
    }
}

impl std::error::Error for SubmitError {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// Simulated form submission: there is no server, sending is a delay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    state: SubmissionState,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SubmissionState::Sending
    }

    /// Validates `form` and moves to `Sending`.
    pub fn begin<T: Validate>(&mut self, form: &T) -> Result<(), SubmitError> {
        if self.is_sending() {
            return Err(SubmitError::AlreadySending);
        }
        form.validate().map_err(SubmitError::Invalid)?;
        self.state = SubmissionState::Sending;
        Ok(())
    }

    pub fn finish(&mut self) {
        if self.is_sending() {
            self.state = SubmissionState::Sent;
        }
    }

    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
    }

    pub fn button_label<'a>(&self, idle: &'a str) -> &'a str {
        if self.is_sending() {
            SENDING_LABEL
        } else {
            idle
        }
    }
}
