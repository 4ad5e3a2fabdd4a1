//! List views over customers and employees.
//!
//! A [`Directory`] holds the rows currently shown plus at most one error
//! message from the last action. An empty result is an empty state, not an
//! error.

use rental_admin_core::Customer;
use tracing::{debug, error, instrument, warn};

use crate::backend::{ApiError, RecordSource};

/// Records carrying a local soft-delete flag.
pub trait SoftDelete {
    fn is_deleted(&self) -> bool;
    fn set_deleted(&mut self, deleted: bool);
}

impl SoftDelete for Customer {
    fn is_deleted(&self) -> bool {
        self.deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.deleted = deleted;
    }
}

/// Rows of one record type as shown in a list view.
#[derive(Debug)]
pub struct Directory<S: RecordSource> {
    service: S,
    rows: Vec<S::Record>,
    search_term: String,
    error: Option<String>,
}

impl<S: RecordSource> Directory<S> {
    /// Empty directory; call [`Directory::refresh`] to populate it.
    pub const fn new(service: S) -> Self {
        Self {
            service,
            rows: Vec::new(),
            search_term: String::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[S::Record] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Message from the last failed action, cleared when an action starts.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Load the full list.
    ///
    /// # Errors
    ///
    /// Returns the backend error; the rows are left as they were.
    #[instrument(skip(self), fields(records = S::PLURAL))]
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.error = None;
        match self.service.list().await {
            Ok(rows) => {
                debug!(count = rows.len(), "directory loaded");
                self.rows = rows;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "failed to load {}", S::PLURAL);
                self.error = Some(format!("Failed to load {}. Please try again.", S::PLURAL));
                Err(e)
            }
        }
    }

    /// Search by name or NIC. An empty term reloads the full list.
    ///
    /// # Errors
    ///
    /// Returns the backend error; the rows are left as they were.
    #[instrument(skip(self), fields(records = S::PLURAL))]
    pub async fn search(&mut self, term: &str) -> Result<(), ApiError> {
        term.clone_into(&mut self.search_term);
        if term.is_empty() {
            return self.refresh().await;
        }

        self.error = None;
        match self.service.search(term).await {
            Ok(rows) => {
                debug!(count = rows.len(), "search finished");
                self.rows = rows;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "search failed");
                self.error = Some("Search failed. Please try again.".to_owned());
                Err(e)
            }
        }
    }

    /// Soft-delete a record remotely, then drop its row.
    ///
    /// # Errors
    ///
    /// Returns the backend error; the row stays in place.
    #[instrument(skip(self), fields(records = S::PLURAL))]
    pub async fn delete(&mut self, id: S::Id) -> Result<(), ApiError> {
        self.error = None;
        match self.service.delete(id).await {
            Ok(()) => {
                self.rows.retain(|row| S::record_id(row) != id);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "delete failed");
                self.error = Some(format!("Failed to delete {}. Please try again.", S::NOUN));
                Err(e)
            }
        }
    }
}

impl<S> Directory<S>
where
    S: RecordSource,
    S::Record: SoftDelete,
{
    /// Clear the deleted flag on a shown row.
    ///
    /// The backend has no restore endpoint, so this only changes the local
    /// row. Returns `false` when no row has that id.
    pub fn restore(&mut self, id: S::Id) -> bool {
        self.error = None;
        warn!(%id, "restore is local only; the backend record stays deleted");
        match self.rows.iter_mut().find(|row| S::record_id(row) == id) {
            Some(row) => {
                row.set_deleted(false);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rental_admin_core::CustomerId;

    use super::*;
    use crate::testing::{FakeCustomers, FakeEmployees, customer, employee};

    fn customers() -> Vec<Customer> {
        vec![
            customer(1, "Amal Perera", r#"{"customerId": 0, "nic": "892345671V"}"#),
            customer(2, "Kamal Silva", r#"{"customerId": 0, "nic": "200012345678", "deleted": true}"#),
        ]
    }

    #[tokio::test]
    async fn test_refresh_and_search() {
        let mut directory = Directory::new(FakeCustomers::with(customers()));
        directory.refresh().await.unwrap();
        assert_eq!(directory.rows().len(), 2);

        directory.search("kamal").await.unwrap();
        assert_eq!(directory.rows().len(), 1);
        assert_eq!(directory.search_term(), "kamal");

        directory.search("").await.unwrap();
        assert_eq!(directory.rows().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_search_result_is_not_an_error() {
        let mut directory = Directory::new(FakeCustomers::with(customers()));
        directory.search("nobody").await.unwrap();
        assert!(directory.is_empty());
        assert_eq!(directory.error(), None);
    }

    #[tokio::test]
    async fn test_delete_removes_row_after_success() {
        let mut directory = Directory::new(FakeCustomers::with(customers()));
        directory.refresh().await.unwrap();
        directory.delete(CustomerId::new(1)).await.unwrap();

        assert_eq!(directory.rows().len(), 1);
        assert_eq!(directory.rows()[0].customer_id, CustomerId::new(2));
        assert_eq!(*directory.service().deletes.lock().unwrap(), vec![CustomerId::new(1)]);
    }

    #[tokio::test]
    async fn test_failures_set_messages() {
        let mut directory = Directory::new(FakeCustomers::failing());
        assert!(directory.refresh().await.is_err());
        assert_eq!(directory.error(), Some("Failed to load customers. Please try again."));

        assert!(directory.search("a").await.is_err());
        assert_eq!(directory.error(), Some("Search failed. Please try again."));

        assert!(directory.delete(CustomerId::new(1)).await.is_err());
        assert_eq!(directory.error(), Some("Failed to delete customer. Please try again."));
    }

    #[tokio::test]
    async fn test_restore_is_local() {
        let mut directory = Directory::new(FakeCustomers::with(customers()));
        directory.refresh().await.unwrap();
        assert!(directory.restore(CustomerId::new(2)));
        assert!(!directory.rows()[1].is_deleted());
        assert!(!directory.restore(CustomerId::new(42)));
    }

    #[tokio::test]
    async fn test_employee_directory_messages() {
        let service = FakeEmployees {
            fail: true,
            ..FakeEmployees::with(vec![employee(1, "Nimal")])
        };
        let mut directory = Directory::new(service);
        assert!(directory.refresh().await.is_err());
        assert_eq!(directory.error(), Some("Failed to load employees. Please try again."));
    }
}
