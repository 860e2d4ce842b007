//! Contact name field

use std::fmt;

use super::field::{define_field, Field, ValidationError};

define_field!(Name, InvalidName);

impl Name {
    fn is_valid(value: &str) -> bool {
        !value.is_empty() && value.chars().all(char::is_alphabetic)
    }
}
