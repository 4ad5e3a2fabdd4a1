//! Rental Admin Core - Shared types library.
//!
//! This crate provides the record types and field validators used by:
//! - `rental-admin` - Backend client, forms, field update dispatch, dashboard
//! - `rental-admin-cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O and no
//! HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, NIC numbers, phones, emails, roles
//! - [`models`] - Customer, employee and address records
//! - [`validation`] - The validators the forms run on each change

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
