//! Subcommand implementations.

pub mod customers;
pub mod dashboard;
pub mod employees;

use std::io;

use rental_admin::dispatch::UpdateOutcome;
use thiserror::Error;

/// Errors specific to command handling.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Pre-flight validation rejected the new value.
    #[error("{0}")]
    Rejected(String),
}

pub(crate) type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Turn an update outcome into a command result, logging saved updates.
pub(crate) fn finish_update(outcome: UpdateOutcome) -> CommandResult {
    match outcome {
        UpdateOutcome::Refreshed => Ok(()),
        UpdateOutcome::Relocated { nic } => {
            tracing::info!(%nic, "record now addressed by its new NIC");
            Ok(())
        }
        UpdateOutcome::Rejected { message } => Err(CommandError::Rejected(message).into()),
        UpdateOutcome::Failed(e) => Err(e.into()),
    }
}

pub(crate) fn stdout() -> io::StdoutLock<'static> {
    io::stdout().lock()
}
