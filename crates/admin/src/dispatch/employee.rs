//! Employee edit view.

use rental_admin_core::{Email, Employee, EmployeeId, Nic, PhoneNumber};
use secrecy::ExposeSecret;
use tracing::{error, info, instrument};

use super::{UpdateOutcome, failure_message, success_message};
use crate::backend::{ApiError, EmployeeField, EmployeeService, EmployeeUpdate};
use crate::error::AdminError;
use crate::forms::{EmployeeForm, ValidatedField};
use crate::notice::Notices;

/// Edits one employee, one field at a time.
#[derive(Debug)]
pub struct EmployeeEditor<S> {
    service: S,
    id: EmployeeId,
    form: EmployeeForm,
    notices: Notices,
}

impl<S: EmployeeService> EmployeeEditor<S> {
    /// Fetch an employee and open it for editing.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; `ApiError::NotFound` when no such employee.
    #[instrument(skip(service))]
    pub async fn load(service: S, id: EmployeeId) -> Result<Self, ApiError> {
        let employee = service.fetch(id).await?;
        Ok(Self::from_record(service, &employee))
    }

    /// Open an already fetched employee.
    pub fn from_record(service: S, employee: &Employee) -> Self {
        Self {
            service,
            id: employee.employee_id,
            form: EmployeeForm::for_record(employee),
            notices: Notices::default(),
        }
    }

    #[must_use]
    pub fn with_notices(mut self, notices: Notices) -> Self {
        self.notices = notices;
        self
    }

    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    #[must_use]
    pub const fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub const fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    #[must_use]
    pub const fn notices(&self) -> &Notices {
        &self.notices
    }

    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Commit one field from the draft.
    ///
    /// A successful password commit clears both password inputs.
    #[instrument(skip(self), fields(employee_id = %self.id))]
    pub async fn update(&mut self, field: EmployeeField) -> UpdateOutcome {
        let Some(update) = self.build_update(field) else {
            let message = validated_field(field)
                .and_then(|v| self.form.errors().get(v))
                .unwrap_or_default()
                .to_owned();
            return UpdateOutcome::Rejected { message };
        };

        match self.service.update(self.id, &update).await {
            Ok(employee) => {
                info!(field = %field, "employee field updated");
                if let Some(validated) = validated_field(field) {
                    self.form.errors_mut().clear(validated);
                }
                self.notices.success(success_message(field.label()));
                self.form.merge_record(&employee);
                match update {
                    EmployeeUpdate::Nic(nic) => UpdateOutcome::Relocated { nic },
                    EmployeeUpdate::Password(_) => {
                        self.form.draft_mut().clear_passwords();
                        UpdateOutcome::Refreshed
                    }
                    _ => UpdateOutcome::Refreshed,
                }
            }
            Err(e) => {
                error!(field = %field, error = %e, "employee field update failed");
                self.notices.error(failure_message(field.as_str()));
                UpdateOutcome::Failed(e)
            }
        }
    }

    /// Pre-flight: turn the draft value of `field` into an update. Failures
    /// are stored on the form.
    fn build_update(&mut self, field: EmployeeField) -> Option<EmployeeUpdate> {
        let draft = self.form.draft();
        let parsed: Result<EmployeeUpdate, String> = match field {
            EmployeeField::Name => Ok(EmployeeUpdate::Name(draft.name.trim().to_owned())),
            EmployeeField::Address => Ok(EmployeeUpdate::Address(draft.address.clone())),
            EmployeeField::Nic => Nic::parse(&draft.nic)
                .map(EmployeeUpdate::Nic)
                .map_err(|e| e.to_string()),
            EmployeeField::Phone => PhoneNumber::parse(&draft.phone_number)
                .map(EmployeeUpdate::Phone)
                .map_err(|e| e.to_string()),
            EmployeeField::Email => Email::parse(&draft.email)
                .map(EmployeeUpdate::Email)
                .map_err(|e| e.to_string()),
            EmployeeField::Role => {
                return self.form.parse_role().map(EmployeeUpdate::Role);
            }
            EmployeeField::Password => {
                if !self.form.check_password() {
                    return None;
                }
                let password = self.form.draft().password.expose_secret().into();
                return Some(EmployeeUpdate::Password(password));
            }
        };

        match parsed {
            Ok(update) => Some(update),
            Err(message) => {
                if let Some(validated) = validated_field(field) {
                    self.form.errors_mut().set(validated, message);
                }
                None
            }
        }
    }
}

const fn validated_field(field: EmployeeField) -> Option<ValidatedField> {
    match field {
        EmployeeField::Nic => Some(ValidatedField::Nic),
        EmployeeField::Phone => Some(ValidatedField::Phone),
        EmployeeField::Email => Some(ValidatedField::Email),
        EmployeeField::Password => Some(ValidatedField::Password),
        EmployeeField::Role => Some(ValidatedField::Role),
        EmployeeField::Name | EmployeeField::Address => None,
    }
}

/// Validate the add-employee form and create the record.
///
/// The service is not called when validation fails.
///
/// # Errors
///
/// Returns the field errors, or the backend error from the create call.
#[instrument(skip_all)]
pub async fn create_employee<S: EmployeeService>(
    service: &S,
    form: &mut EmployeeForm,
) -> Result<Employee, AdminError> {
    let new = form.submit()?;
    let employee = service.create(&new).await?;
    info!(employee_id = %employee.employee_id, "employee created");
    Ok(employee)
}
