//! Rental admin client library.
//!
//! Typed access to the rental backend plus the client-side logic of the
//! admin views: form state with inline validation, per-field update
//! dispatch, list views and dashboard figures.
//!
//! # Layout
//!
//! - [`backend`] - REST client and the service traits everything else is
//!   generic over
//! - [`forms`] - drafts and inline field errors
//! - [`dispatch`] - record editors issuing one update call per field
//! - [`directory`] - list, search, delete and local restore
//! - [`dashboard`] - totals, breakdowns and synthetic chart series
//! - [`notice`] - expiring success and error messages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod config;
pub mod dashboard;
pub mod directory;
pub mod dispatch;
pub mod error;
pub mod forms;
pub mod notice;
pub mod state;

#[cfg(test)]
mod testing;

pub use config::AdminConfig;
pub use error::AdminError;
pub use state::AppState;
