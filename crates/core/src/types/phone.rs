//! Mobile phone numbers.
//!
//! Numbers are stored as 10 bare digits starting with `07` and only grouped
//! for display (`071 234 5678`).

use core::fmt;

use serde::{Deserialize, Serialize};

/// Number of digits in a stored phone number.
pub const PHONE_DIGITS: usize = 10;

/// Errors produced by [`validate_phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("Phone number is required")]
    Required,
    /// Wrong length, wrong prefix or a non-digit character.
    #[error("Phone number must be 10 digits and start with 07 (e.g., 0712345678)")]
    InvalidFormat,
}

/// Check that a phone number is exactly 10 digits starting with `07`.
///
/// # Errors
///
/// Returns [`PhoneError::Required`] for empty input and
/// [`PhoneError::InvalidFormat`] for any other shape.
pub fn validate_phone(value: &str) -> Result<(), PhoneError> {
    if value.is_empty() {
        return Err(PhoneError::Required);
    }

    let valid = value.len() == PHONE_DIGITS
        && value.starts_with("07")
        && value.bytes().all(|b| b.is_ascii_digit());

    if valid {
        Ok(())
    } else {
        Err(PhoneError::InvalidFormat)
    }
}

/// Group a phone number as `XXX XXX XXXX` for display.
///
/// Non-digits are ignored when counting; if exactly 10 digits remain they are
/// grouped, otherwise the input is returned unchanged.
///
/// ```
/// use rental_admin_core::format_phone_number;
///
/// assert_eq!(format_phone_number("0712345678"), "071 234 5678");
/// assert_eq!(format_phone_number("123"), "123");
/// ```
#[must_use]
pub fn format_phone_number(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != PHONE_DIGITS {
        return value.to_owned();
    }
    let (area, rest) = digits.split_at(3);
    let (exchange, line) = rest.split_at(3);
    format!("{area} {exchange} {line}")
}

/// Strip whitespace from a displayed phone number.
///
/// Other separators (`-`, `.`) are left in place.
#[must_use]
pub fn unformat_phone_number(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Normalize raw keyboard input for a phone field: keep digits, cap at 10.
#[must_use]
pub fn normalize_phone_input(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect()
}

/// A validated phone number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a `PhoneNumber` from its stored (unformatted) form.
    ///
    /// # Errors
    ///
    /// Returns an error if the input fails [`validate_phone`].
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        validate_phone(s)?;
        Ok(Self(s.to_owned()))
    }

    /// Returns the bare digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the display form (`071 234 5678`).
    #[must_use]
    pub fn formatted(&self) -> String {
        format_phone_number(&self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(&unformat_phone_number(s))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
