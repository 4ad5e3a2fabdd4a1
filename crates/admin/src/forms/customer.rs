//! Customer create/edit form.

use chrono::NaiveDate;
use rental_admin_core::validation::{normalize_phone_input, validate_nic, validate_phone};
use rental_admin_core::{Address, Customer, NewCustomer, Nic, PhoneNumber};

use super::{FieldErrors, FieldPath, FormError, ValidatedField, non_blank, parse_date_input};

/// Raw form inputs for one customer.
///
/// Dates are kept as typed text until submit or commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub nic: String,
    pub email: String,
    /// Bare digits, at most 10.
    pub phone_number: String,
    pub address: Address,
    pub first_deal_date: String,
    pub last_deal_date: String,
}

impl CustomerDraft {
    /// Draft pre-filled from a stored record.
    #[must_use]
    pub fn from_record(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone().unwrap_or_default(),
            nic: customer.nic.clone().unwrap_or_default(),
            email: customer.email.clone().unwrap_or_default(),
            phone_number: customer.phone_number.clone().unwrap_or_default(),
            address: customer.address.clone().unwrap_or_default(),
            first_deal_date: format_date(customer.first_deal_date),
            last_deal_date: format_date(customer.last_deal_date),
        }
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// A customer draft plus its inline errors.
#[derive(Debug, Clone, Default)]
pub struct CustomerForm {
    draft: CustomerDraft,
    errors: FieldErrors,
}

impl CustomerForm {
    /// Empty form for adding a customer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form for editing an existing customer.
    #[must_use]
    pub fn for_record(customer: &Customer) -> Self {
        Self {
            draft: CustomerDraft::from_record(customer),
            errors: FieldErrors::default(),
        }
    }

    #[must_use]
    pub const fn draft(&self) -> &CustomerDraft {
        &self.draft
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub(crate) const fn errors_mut(&mut self) -> &mut FieldErrors {
        &mut self.errors
    }

    /// Apply one input change.
    ///
    /// NIC and phone are re-validated immediately. Phone input is reduced to
    /// its first 10 digits.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownField` when `path` names no customer field.
    pub fn set_field(&mut self, path: &str, value: &str) -> Result<(), FormError> {
        match FieldPath::parse(path)? {
            FieldPath::Address(part) => self.draft.address.set(part, value),
            FieldPath::Top("name") => self.draft.name = value.to_owned(),
            FieldPath::Top("nic" | "customerId") => {
                self.draft.nic = value.to_owned();
                self.errors.record(ValidatedField::Nic, validate_nic(value));
            }
            FieldPath::Top("email") => self.draft.email = value.to_owned(),
            FieldPath::Top("phone" | "phoneNumber") => {
                let digits = normalize_phone_input(value);
                self.errors
                    .record(ValidatedField::Phone, validate_phone(&digits));
                self.draft.phone_number = digits;
            }
            FieldPath::Top("firstDealDate" | "firstDateDeal") => {
                self.draft.first_deal_date = value.to_owned();
            }
            FieldPath::Top("lastDealDate" | "lastDateDeal") => {
                self.draft.last_deal_date = value.to_owned();
            }
            FieldPath::Top(other) => return Err(FormError::UnknownField(other.to_owned())),
        }
        Ok(())
    }

    /// Replace the draft with a record returned by the backend.
    ///
    /// Inline errors are kept; callers clear the one they just committed.
    pub fn merge_record(&mut self, customer: &Customer) {
        self.draft = CustomerDraft::from_record(customer);
    }

    /// Validate the draft and build the create payload.
    ///
    /// Only the NIC is required. Phone and dates are checked when present.
    ///
    /// # Errors
    ///
    /// Returns every failing field. The same messages are stored on the form.
    pub fn submit(&mut self) -> Result<NewCustomer, FieldErrors> {
        let nic = Nic::parse(&self.draft.nic);
        self.errors
            .record(ValidatedField::Nic, nic.as_ref().map(|_| ()).map_err(ToString::to_string));

        let phone = if self.draft.phone_number.is_empty() {
            self.errors.clear(ValidatedField::Phone);
            None
        } else {
            let phone = PhoneNumber::parse(&self.draft.phone_number);
            self.errors.record(
                ValidatedField::Phone,
                phone.as_ref().map(|_| ()).map_err(ToString::to_string),
            );
            phone.ok()
        };

        let first = parse_date_input(&self.draft.first_deal_date);
        self.errors
            .record(ValidatedField::FirstDealDate, first.map(|_| ()));
        let last = parse_date_input(&self.draft.last_deal_date);
        self.errors
            .record(ValidatedField::LastDealDate, last.map(|_| ()));

        match (nic, first, last) {
            (Ok(nic), Ok(first_deal_date), Ok(last_deal_date)) if self.errors.is_empty() => {
                Ok(NewCustomer {
                    name: self.draft.name.trim().to_owned(),
                    nic,
                    email: non_blank(&self.draft.email),
                    phone_number: phone,
                    address: self.draft.address.clone(),
                    first_deal_date,
                    last_deal_date,
                })
            }
            _ => Err(self.errors.clone()),
        }
    }
}
