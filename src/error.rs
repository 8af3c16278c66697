//! Error types for the contact-book library.
//!
//! This module provides custom error types using `thiserror` for better error handling
//! and more specific error messages throughout the application.

use thiserror::Error;

/// Errors that can occur in the contact-book application.
#[derive(Error, Debug)]
pub enum ContactBookError {
    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV export errors
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// Contact not found
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// Contact name already present in the store
    #[error("Contact already exists: {0}")]
    DuplicateContact(String),

    /// Phone number failed validation
    #[error("Invalid phone number: {0} (expected 10-15 digits)")]
    InvalidPhone(String),

    /// Email address failed validation
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Contact name was empty or whitespace
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// Contact name failed validation
    #[error("Invalid contact name: {0}")]
    InvalidName(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input stream closed or the read was interrupted
    #[error("Input interrupted")]
    Interrupted,

    /// General error with context
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Result with ContactBookError
pub type Result<T> = std::result::Result<T, ContactBookError>;

impl From<anyhow::Error> for ContactBookError {
    fn from(err: anyhow::Error) -> Self {
        ContactBookError::Other(err.to_string())
    }
}
