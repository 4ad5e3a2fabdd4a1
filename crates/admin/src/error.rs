//! Unified error type for admin operations.

use thiserror::Error;

use crate::backend::ApiError;
use crate::backend::endpoints::UnknownField;
use crate::config::ConfigError;
use crate::dashboard::DashboardError;
use crate::forms::{FieldErrors, FormError};

/// Any failure surfaced by an admin operation.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Form input failed validation; nothing was sent.
    #[error("Invalid input: {0}")]
    Form(#[from] FieldErrors),

    /// Unknown form field path.
    #[error(transparent)]
    Field(#[from] FormError),

    /// Unknown logical field name for an update.
    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    /// Dashboard data could not be loaded.
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
}

impl AdminError {
    /// Whether the failure came from user input rather than the backend or
    /// the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Form(_) | Self::Field(_) | Self::UnknownField(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ValidatedField;

    #[test]
    fn test_form_error_display() {
        let mut errors = FieldErrors::default();
        errors.set(ValidatedField::Nic, "NIC is required");
        let err = AdminError::from(errors);
        assert_eq!(err.to_string(), "Invalid input: nic: NIC is required");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_api_error_is_not_user_error() {
        let err = AdminError::from(ApiError::Unauthorized);
        assert!(!err.is_user_error());
    }
}
