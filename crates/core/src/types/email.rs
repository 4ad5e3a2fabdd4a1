//! Email addresses on employee records.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Reasons an email input is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("Email is required")]
    Required,
    /// The input does not have the `local@domain.tld` shape.
    #[error("Please enter a valid email address")]
    Invalid,
}

/// Check an email address of the form `local@host.tld`.
///
/// The local part allows `A-Z a-z 0-9 . _ -`, the host allows
/// `A-Z a-z 0-9 . -` and the TLD is 2 to 6 ASCII letters.
///
/// # Errors
///
/// Returns [`EmailError::Required`] for empty input and
/// [`EmailError::Invalid`] otherwise.
pub fn validate_email(value: &str) -> Result<(), EmailError> {
    if value.is_empty() {
        return Err(EmailError::Required);
    }

    let (local, domain) = value.split_once('@').ok_or(EmailError::Invalid)?;

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if !local_ok {
        return Err(EmailError::Invalid);
    }

    // The TLD is whatever follows the last dot; the host before it may
    // itself contain dots.
    let (host, tld) = domain.rsplit_once('.').ok_or(EmailError::Invalid)?;
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let tld_ok = (2..=6).contains(&tld.len()) && tld.chars().all(|c| c.is_ascii_alphabetic());

    if host_ok && tld_ok {
        Ok(())
    } else {
        Err(EmailError::Invalid)
    }
}

/// A validated email address, as sent in an employee create payload.
///
/// ```
/// use rental_admin_core::Email;
///
/// assert!(Email::parse("amal.perera@example.com").is_ok());
/// assert!(Email::parse("ops_team@mail.example.lk").is_ok());
/// assert!(Email::parse("user@host").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// # Errors
    ///
    /// Returns the [`validate_email`] error for the input.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        validate_email(s).map(|()| Self(s.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_staff_addresses() {
        assert!(Email::parse("nimal@rental.lk").is_ok());
        assert!(Email::parse("nimal.silva@rental.lk").is_ok());
        assert!(Email::parse("user_name-1@sub.example.co").is_ok());
        assert!(Email::parse("a@b.museum").is_ok());
    }

    #[test]
    fn test_empty_is_required() {
        assert_eq!(Email::parse(""), Err(EmailError::Required));
    }

    #[test]
    fn test_parse_invalid() {
        for bad in [
            "no-at-symbol",
            "@domain.com",
            "user@",
            "user@host",
            "user@.com",
            "user+tag@example.com",
            "user@example.c",
            "user@example.toolong",
            "user@example.c0m",
        ] {
            assert_eq!(Email::parse(bad), Err(EmailError::Invalid), "{bad}");
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(EmailError::Required.to_string(), "Email is required");
        assert_eq!(
            validate_email("user@host").unwrap_err().to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_serde_transparent() {
        let email = Email::parse("nimal@rental.lk").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"nimal@rental.lk\"");
    }
}
