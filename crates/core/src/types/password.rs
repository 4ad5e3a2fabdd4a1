//! Password strength policy.

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the special-character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// The first rule a password breaks.
///
/// Rules are checked in declaration order and only the first failure is
/// reported.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    /// The input string is empty.
    #[error("Password is required")]
    Required,
    /// Shorter than [`MIN_PASSWORD_LENGTH`] characters.
    #[error("Password must be at least 8 characters long")]
    TooShort,
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,
    #[error("Password must contain at least one number")]
    MissingDigit,
    /// None of [`SPECIAL_CHARACTERS`] present.
    #[error("Password must contain at least one special character")]
    MissingSpecial,
}

/// Check a password against the strength policy.
///
/// # Errors
///
/// Returns the first failing rule.
pub fn validate_password(value: &str) -> Result<(), PasswordError> {
    if value.is_empty() {
        return Err(PasswordError::Required);
    }
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort);
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordError::MissingUppercase);
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordError::MissingLowercase);
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordError::MissingDigit);
    }
    if !value.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(PasswordError::MissingSpecial);
    }
    Ok(())
}
