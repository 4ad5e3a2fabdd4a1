//! Client for the rental REST backend.
//!
//! The backend exposes one endpoint per list/search/create/delete action and
//! one endpoint per updatable field. Scalar field updates travel as a query
//! parameter; address updates carry a JSON body. See [`endpoints`] for the
//! full mapping.
//!
//! # Services
//!
//! [`BackendClient::customers`] and [`BackendClient::employees`] return
//! handles implementing [`CustomerService`] and [`EmployeeService`]. The
//! forms, dispatcher, directories and dashboard are generic over those
//! traits so they can run against any implementation.

mod client;
mod customers;
mod employees;
pub mod endpoints;

pub use client::BackendClient;
pub use customers::Customers;
pub use employees::Employees;
pub use endpoints::{CustomerField, CustomerUpdate, EmployeeField, EmployeeUpdate, Endpoint, Param};

use std::fmt;
use std::future::Future;

use rental_admin_core::{Customer, CustomerId, Employee, EmployeeId, NewCustomer, NewEmployee};
use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, timeout, TLS).
    ///
    /// Carries no URL: query strings may hold a password.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Backend returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Rejected credentials.
    #[error("Unauthorized: check RENTAL_API_TOKEN")]
    Unauthorized,
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.without_url())
    }
}

/// Read and delete access shared by both record types.
pub trait RecordSource: Send + Sync {
    /// Backend key of a record.
    type Id: Copy + Eq + fmt::Display + fmt::Debug + Send + Sync;
    /// Record as returned by the backend.
    type Record: Clone + Send + Sync;

    /// Singular lowercase noun used in user-facing messages.
    const NOUN: &'static str;
    /// Plural lowercase noun used in user-facing messages.
    const PLURAL: &'static str;

    /// Key of a record.
    fn record_id(record: &Self::Record) -> Self::Id;

    /// All records.
    fn list(&self) -> impl Future<Output = Result<Vec<Self::Record>, ApiError>> + Send;

    /// Records whose name or NIC contains `term` (case-insensitive).
    fn search(&self, term: &str)
    -> impl Future<Output = Result<Vec<Self::Record>, ApiError>> + Send;

    /// One record by key.
    fn fetch(&self, id: Self::Id) -> impl Future<Output = Result<Self::Record, ApiError>> + Send;

    /// Soft-delete one record.
    fn delete(&self, id: Self::Id) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Customer endpoints.
pub trait CustomerService: RecordSource<Id = CustomerId, Record = Customer> {
    /// Create a customer from a fully assembled payload.
    fn create(&self, new: &NewCustomer)
    -> impl Future<Output = Result<Customer, ApiError>> + Send;

    /// Update exactly one field. Returns the record as stored afterwards.
    fn update(
        &self,
        id: CustomerId,
        update: &CustomerUpdate,
    ) -> impl Future<Output = Result<Customer, ApiError>> + Send;

    /// Number of customers not soft-deleted.
    fn active_count(&self) -> impl Future<Output = Result<u64, ApiError>> + Send;
}

/// Employee endpoints.
pub trait EmployeeService: RecordSource<Id = EmployeeId, Record = Employee> {
    /// Create an employee from a fully assembled payload.
    fn create(&self, new: &NewEmployee)
    -> impl Future<Output = Result<Employee, ApiError>> + Send;

    /// Update exactly one field. Returns the record as stored afterwards.
    fn update(
        &self,
        id: EmployeeId,
        update: &EmployeeUpdate,
    ) -> impl Future<Output = Result<Employee, ApiError>> + Send;
}
