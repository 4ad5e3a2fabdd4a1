//! Employee create/edit form.

use rental_admin_core::validation::{
    normalize_phone_input, validate_email, validate_nic, validate_password, validate_phone,
};
use rental_admin_core::{Address, Email, Employee, EmployeeRole, NewEmployee, Nic, PhoneNumber};
use secrecy::{ExposeSecret, SecretString};

use super::{FieldErrors, FieldPath, FormError, Required, ValidatedField};

/// Message stored on the password field when the confirmation differs.
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Raw form inputs for one employee.
#[derive(Debug, Clone)]
pub struct EmployeeDraft {
    pub name: String,
    pub nic: String,
    /// Role as typed or selected; parsed on submit or commit.
    pub role: String,
    /// Bare digits, at most 10.
    pub phone_number: String,
    pub email: String,
    pub username: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub address: Address,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            nic: String::new(),
            role: EmployeeRole::Manager.as_str().to_owned(),
            phone_number: String::new(),
            email: String::new(),
            username: String::new(),
            password: SecretString::default(),
            confirm_password: SecretString::default(),
            address: Address::default(),
        }
    }
}

impl EmployeeDraft {
    /// Draft pre-filled from a stored record. Password inputs start empty.
    #[must_use]
    pub fn from_record(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone().unwrap_or_default(),
            nic: employee.nic.clone().unwrap_or_default(),
            role: employee
                .role
                .map(|r| r.as_str().to_owned())
                .unwrap_or_default(),
            phone_number: employee.phone_number.clone().unwrap_or_default(),
            email: employee.email.clone().unwrap_or_default(),
            username: employee.username.clone().unwrap_or_default(),
            password: SecretString::default(),
            confirm_password: SecretString::default(),
            address: employee.address.clone().unwrap_or_default(),
        }
    }

    /// Whether the two password inputs agree.
    #[must_use]
    pub fn passwords_match(&self) -> bool {
        self.password.expose_secret() == self.confirm_password.expose_secret()
    }

    /// Clear both password inputs.
    pub fn clear_passwords(&mut self) {
        self.password = SecretString::default();
        self.confirm_password = SecretString::default();
    }
}

/// An employee draft plus its inline errors.
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    draft: EmployeeDraft,
    errors: FieldErrors,
}

impl EmployeeForm {
    /// Fields counted by [`EmployeeForm::progress`].
    pub const REQUIRED_FIELDS: [&'static str; 7] = [
        "name",
        "nic",
        "role",
        "phoneNumber",
        "email",
        "username",
        "password",
    ];

    /// Empty form for adding an employee; the role starts as `Manager`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form for editing an existing employee.
    #[must_use]
    pub fn for_record(employee: &Employee) -> Self {
        Self {
            draft: EmployeeDraft::from_record(employee),
            errors: FieldErrors::default(),
        }
    }

    #[must_use]
    pub const fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub(crate) const fn draft_mut(&mut self) -> &mut EmployeeDraft {
        &mut self.draft
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
    /// NIC, phone, email and password are re-validated immediately.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownField` when `path` names no employee field.
    pub fn set_field(&mut self, path: &str, value: &str) -> Result<(), FormError> {
        match FieldPath::parse(path)? {
            FieldPath::Address(part) => self.draft.address.set(part, value),
            FieldPath::Top("name") => self.draft.name = value.to_owned(),
            FieldPath::Top("nic" | "employeeId") => {
                self.draft.nic = value.to_owned();
                self.errors.record(ValidatedField::Nic, validate_nic(value));
            }
            FieldPath::Top("role") => self.draft.role = value.to_owned(),
            FieldPath::Top("phone" | "phoneNumber") => {
                let digits = normalize_phone_input(value);
                self.errors
                    .record(ValidatedField::Phone, validate_phone(&digits));
                self.draft.phone_number = digits;
            }
            FieldPath::Top("email") => {
                self.draft.email = value.to_owned();
                self.errors
                    .record(ValidatedField::Email, validate_email(value));
            }
            FieldPath::Top("username") => self.draft.username = value.to_owned(),
            FieldPath::Top("password") => {
                self.draft.password = SecretString::from(value);
                self.errors
                    .record(ValidatedField::Password, validate_password(value));
            }
            FieldPath::Top("confirmPassword") => {
                self.draft.confirm_password = SecretString::from(value);
            }
            FieldPath::Top(other) => return Err(FormError::UnknownField(other.to_owned())),
        }
        Ok(())
    }

    /// Replace the draft with a record returned by the backend, keeping
    /// whatever is in the password inputs.
    pub fn merge_record(&mut self, employee: &Employee) {
        let password = std::mem::take(&mut self.draft.password);
        let confirm = std::mem::take(&mut self.draft.confirm_password);
        self.draft = EmployeeDraft::from_record(employee);
        self.draft.password = password;
        self.draft.confirm_password = confirm;
    }

    /// Share of [`Self::REQUIRED_FIELDS`] that are non-blank, in whole
    /// percent.
    #[must_use]
    pub fn progress(&self) -> u8 {
        let d = &self.draft;
        let filled = [
            d.name.as_str(),
            d.nic.as_str(),
            d.role.as_str(),
            d.phone_number.as_str(),
            d.email.as_str(),
            d.username.as_str(),
            d.password.expose_secret(),
        ]
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .count();

        let total = Self::REQUIRED_FIELDS.len();
        // filled <= total, so the result is at most 100
        u8::try_from((filled * 100 + total / 2) / total).unwrap_or(100)
    }

    /// Check the password input and its confirmation.
    ///
    /// Stores the message on the password field and returns `false` when
    /// either check fails.
    pub(crate) fn check_password(&mut self) -> bool {
        if let Err(e) = validate_password(self.draft.password.expose_secret()) {
            self.errors.set(ValidatedField::Password, e.to_string());
            return false;
        }
        if !self.draft.passwords_match() {
            self.errors
                .set(ValidatedField::Password, PASSWORDS_DO_NOT_MATCH);
            return false;
        }
        self.errors.clear(ValidatedField::Password);
        true
    }

    /// Parse the role input, storing the error on failure.
    pub(crate) fn parse_role(&mut self) -> Option<EmployeeRole> {
        match self.draft.role.parse::<EmployeeRole>() {
            Ok(role) => {
                self.errors.clear(ValidatedField::Role);
                Some(role)
            }
            Err(e) => {
                self.errors.set(ValidatedField::Role, e.to_string());
                None
            }
        }
    }

    /// Validate the draft and build the create payload.
    ///
    /// # Errors
    ///
    /// Returns every failing field. The same messages are stored on the form.
    pub fn submit(&mut self) -> Result<NewEmployee, FieldErrors> {
        let name = required(&mut self.errors, ValidatedField::Name, "Name", &self.draft.name);
        let username = required(
            &mut self.errors,
            ValidatedField::Username,
            "Username",
            &self.draft.username,
        );

        let nic = Nic::parse(&self.draft.nic).map_err(|e| {
            self.errors.set(ValidatedField::Nic, e.to_string());
        });
        let phone = PhoneNumber::parse(&self.draft.phone_number).map_err(|e| {
            self.errors.set(ValidatedField::Phone, e.to_string());
        });
        let email = Email::parse(&self.draft.email).map_err(|e| {
            self.errors.set(ValidatedField::Email, e.to_string());
        });
        let role = self.parse_role();
        let password_ok = self.check_password();

        match (name, username, nic, phone, email, role) {
            (Some(name), Some(username), Ok(nic), Ok(phone_number), Ok(email), Some(role))
                if password_ok && self.errors.is_empty() =>
            {
                Ok(NewEmployee {
                    name,
                    nic,
                    role,
                    phone_number,
                    email,
                    username,
                    password: self.draft.password.clone(),
                    address: self.draft.address.clone(),
                })
            }
            _ => Err(self.errors.clone()),
        }
    }
}

fn required(
    errors: &mut FieldErrors,
    field: ValidatedField,
    label: &'static str,
    value: &str,
) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        errors.set(field, Required(label).to_string());
        None
    } else {
        errors.clear(field);
        Some(value.to_owned())
    }
}
