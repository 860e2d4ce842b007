//! Validated field values
//!
//! Every piece of contact data is wrapped in a field type that checks its
//! format once, at construction. A field that exists is always valid.

use std::fmt;

/// A validated scalar value that renders as its textual form
pub trait Field: fmt::Display {
    /// The raw string the field was constructed from
    fn value(&self) -> &str;
}

/// Validation errors for contact fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty or contains a non-alphabetic character
    InvalidName(String),
    /// Phone is not exactly ten decimal digits
    InvalidPhone(String),
    /// Birthday does not parse as a DD.MM.YYYY calendar date
    InvalidBirthday(String),
}

impl ValidationError {
    /// The rejected input
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidName(s) | Self::InvalidPhone(s) | Self::InvalidBirthday(s) => s,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(_) => write!(
                f,
                "Invalid name format. Name should contain only alphabetic characters."
            ),
            Self::InvalidPhone(_) => write!(f, "Invalid phone number format."),
            Self::InvalidBirthday(_) => write!(f, "Invalid birthday format. Use DD.MM.YYYY."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Macro to generate string-backed field newtypes
///
/// The type must provide `fn is_valid(&str) -> bool`; `$error` is the
/// `ValidationError` variant returned when it fails.
macro_rules! define_field {
    ($name:ident, $error:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap a raw value
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if !Self::is_valid(&value) {
                    return Err(ValidationError::$error(value));
                }
                Ok(Self(value))
            }

            /// Get the value as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Field for $name {
            fn value(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}

pub(crate) use define_field;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::InvalidName("J0hn".into()).to_string(),
            "Invalid name format. Name should contain only alphabetic characters."
        );
        assert_eq!(
            ValidationError::InvalidBirthday("1990-12-25".into()).to_string(),
            "Invalid birthday format. Use DD.MM.YYYY."
        );
    }

    #[test]
    fn test_error_keeps_input() {
        let err = ValidationError::InvalidPhone("12345".into());
        assert_eq!(err.input(), "12345");
    }
}
