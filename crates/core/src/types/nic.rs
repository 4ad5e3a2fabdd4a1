//! National Identity Card number.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors produced by [`validate_nic`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NicError {
    /// The input string is empty.
    #[error("NIC is required")]
    Required,
    /// The input matches neither the old nor the new format.
    #[error("NIC must be either 9 digits followed by V/v or 12 digits")]
    InvalidFormat,
}

/// Check a NIC against the two accepted formats.
///
/// - old format: 9 digits followed by `V` or `v` (`^\d{9}[Vv]$`)
/// - new format: 12 digits (`^\d{12}$`)
///
/// No normalization is performed.
///
/// # Errors
///
/// Returns [`NicError::Required`] for empty input and
/// [`NicError::InvalidFormat`] for any other shape.
pub fn validate_nic(value: &str) -> Result<(), NicError> {
    if value.is_empty() {
        return Err(NicError::Required);
    }

    let bytes = value.as_bytes();
    let is_old = bytes.len() == 10
        && bytes.iter().take(9).all(u8::is_ascii_digit)
        && matches!(bytes.last(), Some(b'V' | b'v'));
    let is_new = bytes.len() == 12 && bytes.iter().all(u8::is_ascii_digit);

    if is_old || is_new {
        Ok(())
    } else {
        Err(NicError::InvalidFormat)
    }
}

/// A validated NIC number.
///
/// ```
/// use rental_admin_core::Nic;
///
/// assert!(Nic::parse("892345671V").is_ok());
/// assert!(Nic::parse("200012345678").is_ok());
/// assert!(Nic::parse("89234567V").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Nic(String);

impl Nic {
    /// Parse a `Nic` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input fails [`validate_nic`].
    pub fn parse(s: &str) -> Result<Self, NicError> {
        validate_nic(s)?;
        Ok(Self(s.to_owned()))
    }

    /// Returns the NIC as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a 12-digit (new format) NIC.
    #[must_use]
    pub const fn is_new_format(&self) -> bool {
        self.0.len() == 12
    }
}

impl fmt::Display for Nic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Nic {
    type Err = NicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Nic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
