use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::*;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\-\s]{7,15}$").expect("phone pattern compiles"));

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(invalid("name_too_short", NAME_REQUIRED_ERROR));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_REGEX.is_match(email.trim()) {
        return Err(invalid("invalid_email_format", INVALID_EMAIL_ERROR));
    }
    Ok(())
}

pub fn validate_message(message: &str) -> Result<(), ValidationError> {
    if message.trim().chars().count() < MIN_MESSAGE_LENGTH {
        return Err(invalid("message_too_short", MESSAGE_TOO_SHORT_ERROR));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if !PHONE_REGEX.is_match(phone.trim()) {
        return Err(invalid("invalid_phone", INVALID_PHONE_ERROR));
    }
    Ok(())
}

pub fn validate_service(service: &str) -> Result<(), ValidationError> {
    if service.trim().is_empty() {
        return Err(invalid("service_required", SERVICE_REQUIRED_ERROR));
    }
    Ok(())
}

/// Message to show under a field, falling back to the error code.
pub fn error_message(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        assert!(validate_name("  a  ").is_err());
        assert!(validate_name("Al").is_ok());
    }

    #[test]
    fn test_email_format() {
        assert!(validate_email("someone@example.com").is_ok());
        assert!(validate_email(" someone@example.com ").is_ok());
        assert!(validate_email("someone@example").is_err());
        assert!(validate_email("some one@example.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_message_minimum() {
        assert!(validate_message("too short").is_err());
        assert!(validate_message("long enough text").is_ok());
        assert!(validate_message("   short     ").is_err());
    }

    #[test]
    fn test_phone_format() {
        assert!(validate_phone("+91 98765-43210").is_ok());
        assert!(validate_phone("1234567").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("call me maybe").is_err());
    }

    #[test]
    fn test_error_message_uses_human_text() {
        let error = validate_service("").unwrap_err();
        assert_eq!(error.code, "service_required");
        assert_eq!(error_message(&error), SERVICE_REQUIRED_ERROR);
    }
}
