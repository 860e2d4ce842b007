//! Custom error types for the contact assistant
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::ValidationError;

/// The main error type for contact assistant operations
#[derive(Error, Debug)]
pub enum AssistantError {
    /// A field value violated its format invariant
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Wrong number of arguments for a command
    #[error("Wrong number of arguments for '{command}'. Usage: {usage}")]
    Arity {
        command: &'static str,
        usage: &'static str,
    },

    /// Listing was requested on a book with no records
    #[error("The address book is empty")]
    EmptyBook,

    /// The first token of an input line is not a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl AssistantError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for phones
    pub fn phone_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Phone",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for a contact without a birthday
    pub fn birthday_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Birthday",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for AssistantError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AssistantError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for contact assistant operations
pub type AssistantResult<T> = Result<T, AssistantError>;
