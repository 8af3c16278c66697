//! Input validation and normalization for contact fields.

use crate::error::{ContactBookError, Result};
use regex::Regex;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // The pattern is a constant, so the parse cannot fail
        #[allow(clippy::expect_used)]
        let re = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email pattern is valid");
        re
    })
}

/// Validation utilities for input sanitization and edge case handling
#[derive(Debug, Copy, Clone)]
pub struct InputValidator;

impl InputValidator {
    /// Validate contact name
    pub fn validate_contact_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ContactBookError::EmptyName);
        }

        if name.len() > 100 {
            return Err(ContactBookError::InvalidName(
                "name too long (max 100 characters)".to_string(),
            ));
        }

        // Check for potentially dangerous characters
        if name.contains('\0') || name.contains('\r') || name.contains('\n') {
            return Err(ContactBookError::InvalidName(
                "name contains invalid characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate and normalize a phone number.
    ///
    /// Strips every non-digit character, then accepts the result iff it is
    /// 10 to 15 digits long. Returns the stripped digit string, which is what
    /// gets stored.
    pub fn validate_phone(phone: &str) -> Result<String> {
        let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

        if (10..=15).contains(&digits.len()) {
            Ok(digits)
        } else {
            Err(ContactBookError::InvalidPhone(phone.to_string()))
        }
    }

    /// Validate email format.
    ///
    /// An empty input is valid since email is optional. A non-empty input
    /// must have the shape `local@domain.tld` with a TLD of at least two
    /// letters. The value is not normalized.
    pub fn validate_email(email: &str) -> Result<()> {
        if email.is_empty() {
            return Ok(());
        }

        if email_re().is_match(email) {
            Ok(())
        } else {
            Err(ContactBookError::InvalidEmail(email.to_string()))
        }
    }
}
