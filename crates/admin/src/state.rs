//! Shared handles for one admin session.

use std::sync::Arc;

use crate::backend::{ApiError, BackendClient, Customers, Employees};
use crate::config::AdminConfig;
use crate::notice::Notices;

/// Configuration plus the backend client, shared across views.
///
/// Cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: AdminConfig,
    client: BackendClient,
}

impl AppState {
    /// Build the backend client from `config`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: AdminConfig) -> Result<Self, ApiError> {
        let client = BackendClient::new(&config.backend)?;
        Ok(Self {
            inner: Arc::new(AppStateInner { config, client }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn client(&self) -> &BackendClient {
        &self.inner.client
    }

    #[must_use]
    pub fn customers(&self) -> Customers {
        self.inner.client.customers()
    }

    #[must_use]
    pub fn employees(&self) -> Employees {
        self.inner.client.employees()
    }

    /// Empty notice slot using the configured lifetime.
    #[must_use]
    pub fn notices(&self) -> Notices {
        Notices::new(self.inner.config.notice_ttl)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::BackendConfig;

    #[test]
    fn test_state_uses_configured_ttl() {
        let config = AdminConfig {
            backend: BackendConfig::new("http://localhost:8080").unwrap(),
            notice_ttl: Duration::from_secs(9),
        };
        let state = AppState::new(config).unwrap();
        assert_eq!(state.client().base_url(), "http://localhost:8080");
        assert_eq!(state.config().notice_ttl, Duration::from_secs(9));
    }
}
