//! Per-field update dispatch for record edit views.
//!
//! An editor owns one record's form. `update(field)` validates that field,
//! sends exactly one update call carrying only its value, then posts a
//! notice and merges the returned record. Updates are never batched,
//! retried or rolled back, so a sequence of updates may partially succeed.

mod customer;
mod employee;

pub use customer::{CustomerEditor, create_customer};
pub use employee::{EmployeeEditor, create_employee};

use rental_admin_core::Nic;

use crate::backend::ApiError;

/// Result of one field update.
#[derive(Debug)]
pub enum UpdateOutcome {
    /// Saved; the form now shows the returned record.
    Refreshed,
    /// The NIC changed. The record should be re-opened under the new NIC.
    Relocated { nic: Nic },
    /// Pre-flight validation failed; nothing was sent.
    Rejected { message: String },
    /// The backend call failed.
    Failed(ApiError),
}

impl UpdateOutcome {
    /// Whether the backend accepted the update.
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Refreshed | Self::Relocated { .. })
    }
}

pub(crate) fn success_message(label: &str) -> String {
    format!("{label} updated successfully")
}

pub(crate) fn failure_message(field: &str) -> String {
    format!("Failed to update {field}. Please try again.")
}
