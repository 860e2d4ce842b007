//! Phone number field
//!
//! Phones are stored exactly as entered: ten ASCII decimal digits, no
//! separators or country prefix.

use std::fmt;

use super::field::{define_field, Field, ValidationError};

/// Required number of digits in a phone number
pub const PHONE_LENGTH: usize = 10;

define_field!(Phone, InvalidPhone);

impl Phone {
    fn is_valid(value: &str) -> bool {
        value.len() == PHONE_LENGTH && value.bytes().all(|b| b.is_ascii_digit())
    }
}
