//! Field validators used by the add and edit forms.
//!
//! All validators are pure. Each returns `Ok(())` for an acceptable value or
//! an error whose `Display` is the message shown next to the field.

pub use crate::types::{
    validate_email, validate_nic, validate_password, validate_phone,
    format_phone_number, normalize_phone_input, unformat_phone_number,
};

/// Render a validation result the way the forms store it: the error message,
/// or an empty string when the value is acceptable.
#[must_use]
pub fn message<E: std::fmt::Display>(result: &Result<(), E>) -> String {
    result.as_ref().err().map(ToString::to_string).unwrap_or_default()
}
