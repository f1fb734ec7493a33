//! # Structural Validation
//!
//! Create payloads are checked here before any store access. A failed
//! check maps to a 422 response and never reaches a connection.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// A client input error, detected before the store is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required text field is empty or whitespace-only
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// Email field does not look like an address
    #[error("field '{0}' is not a valid email address: '{1}'")]
    InvalidEmail(&'static str, String),
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

/// Required text fields reject empty and whitespace-only input.
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

/// Email fields must match standard address syntax.
pub fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !email_regex().is_match(value) {
        return Err(ValidationError::InvalidEmail(field, value.to_string()));
    }
    Ok(())
}

/// Optional email fields are checked only when present.
pub fn optional_email(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(v) => require_email(field, v),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_rejects_empty() {
        assert_eq!(
            require_text("nombre", ""),
            Err(ValidationError::EmptyField("nombre"))
        );
        assert_eq!(
            require_text("nombre", "   "),
            Err(ValidationError::EmptyField("nombre"))
        );
        assert!(require_text("nombre", "Sede Central").is_ok());
    }

    #[test]
    fn test_require_email_accepts_plausible_addresses() {
        assert!(require_email("email", "ana@example.com").is_ok());
        assert!(require_email("email", "a.b+c@sub.dominio.co").is_ok());
    }

    #[test]
    fn test_require_email_rejects_malformed_addresses() {
        for bad in ["", "no-at-sign", "dos@@ejemplo.com", "sin@dominio", "con espacios@x.com"] {
            assert!(require_email("email", bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_optional_email_skips_absent_values() {
        assert!(optional_email("email", None).is_ok());
        assert!(optional_email("email", Some("x@y.z")).is_ok());
        assert!(optional_email("email", Some("broken")).is_err());
    }
}
