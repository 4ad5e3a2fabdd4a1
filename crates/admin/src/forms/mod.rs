//! Record form state: in-progress drafts plus per-field error strings.
//!
//! Forms accept edits through `set_field(path, value)` where `path` is either
//! a top-level field (`"name"`) or an address part (`"address.city"`).
//! Address edits merge into the nested address; siblings are never dropped.
//!
//! Fields with a format (NIC, phone, password, employee email) are validated
//! on every change. Everything else is validated at submit or commit time.

mod customer;
mod employee;

pub use customer::{CustomerDraft, CustomerForm};
pub use employee::{EmployeeDraft, EmployeeForm, PASSWORDS_DO_NOT_MATCH};

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rental_admin_core::AddressField;
use thiserror::Error;

/// Errors from [`CustomerForm::set_field`] / [`EmployeeForm::set_field`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// A parsed field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath<'a> {
    Top(&'a str),
    Address(AddressField),
}

impl<'a> FieldPath<'a> {
    /// Split `"address.city"` style paths.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownField` for an unknown address part or a
    /// path nested deeper than one level.
    pub fn parse(path: &'a str) -> Result<Self, FormError> {
        match path.split_once('.') {
            None => Ok(Self::Top(path)),
            Some(("address", part)) => AddressField::from_key(part)
                .map(Self::Address)
                .ok_or_else(|| FormError::UnknownField(path.to_owned())),
            Some(_) => Err(FormError::UnknownField(path.to_owned())),
        }
    }
}

/// Fields that carry an inline error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValidatedField {
    Name,
    Nic,
    Phone,
    Email,
    Username,
    Role,
    Password,
    FirstDealDate,
    LastDealDate,
}

impl ValidatedField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Nic => "nic",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Username => "username",
            Self::Role => "role",
            Self::Password => "password",
            Self::FirstDealDate => "firstDealDate",
            Self::LastDealDate => "lastDealDate",
        }
    }
}

/// One error string per validated field. Absent means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ValidatedField, String>);

impl FieldErrors {
    /// Store the outcome of a validator: the message on error, nothing on
    /// success.
    pub fn record<E: fmt::Display>(&mut self, field: ValidatedField, result: Result<(), E>) {
        match result {
            Ok(()) => {
                self.0.remove(&field);
            }
            Err(e) => {
                self.0.insert(field, e.to_string());
            }
        }
    }

    pub fn set(&mut self, field: ValidatedField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: ValidatedField) {
        self.0.remove(&field);
    }

    #[must_use]
    pub fn get(&self, field: ValidatedField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ValidatedField, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {message}", field.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Message for a required free-text field left blank.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{0} is required")]
pub struct Required(pub &'static str);

/// Message for an unparseable date input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Date must be in YYYY-MM-DD format")]
pub struct InvalidDate;

/// Parse an optional `YYYY-MM-DD` input. Blank input is `Ok(None)`.
///
/// # Errors
///
/// Returns [`InvalidDate`] for non-blank input that is not a calendar date.
pub fn parse_date_input(value: &str) -> Result<Option<NaiveDate>, InvalidDate> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| InvalidDate)
}

/// `Some(trimmed)` unless blank.
fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}
