//! Customer edit view.

use rental_admin_core::{Customer, CustomerId, Nic, PhoneNumber};
use tracing::{error, info, instrument};

use super::{UpdateOutcome, failure_message, success_message};
use crate::backend::{ApiError, CustomerField, CustomerService, CustomerUpdate};
use crate::error::AdminError;
use crate::forms::{CustomerForm, Required, ValidatedField, parse_date_input};
use crate::notice::Notices;

/// Edits one customer, one field at a time.
#[derive(Debug)]
pub struct CustomerEditor<S> {
    service: S,
    id: CustomerId,
    form: CustomerForm,
    notices: Notices,
}

impl<S: CustomerService> CustomerEditor<S> {
    /// Fetch a customer and open it for editing.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; `ApiError::NotFound` when no such customer.
    #[instrument(skip(service))]
    pub async fn load(service: S, id: CustomerId) -> Result<Self, ApiError> {
        let customer = service.fetch(id).await?;
        Ok(Self::from_record(service, &customer))
    }

    /// Open an already fetched customer.
    pub fn from_record(service: S, customer: &Customer) -> Self {
        Self {
            service,
            id: customer.customer_id,
            form: CustomerForm::for_record(customer),
            notices: Notices::default(),
        }
    }

    #[must_use]
    pub fn with_notices(mut self, notices: Notices) -> Self {
        self.notices = notices;
        self
    }

    #[must_use]
    pub const fn id(&self) -> CustomerId {
        self.id
    }

    #[must_use]
    pub const fn form(&self) -> &CustomerForm {
        &self.form
    }

    pub const fn form_mut(&mut self) -> &mut CustomerForm {
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
    #[instrument(skip(self), fields(customer_id = %self.id))]
    pub async fn update(&mut self, field: CustomerField) -> UpdateOutcome {
        let update = match build_update(field, &mut self.form) {
            Ok(update) => update,
            Err(message) => return UpdateOutcome::Rejected { message },
        };

        match self.service.update(self.id, &update).await {
            Ok(customer) => {
                info!(field = %field, "customer field updated");
                if let Some(validated) = validated_field(field) {
                    self.form.errors_mut().clear(validated);
                }
                self.notices.success(success_message(field.label()));
                self.form.merge_record(&customer);
                match update {
                    CustomerUpdate::Nic(nic) => UpdateOutcome::Relocated { nic },
                    _ => UpdateOutcome::Refreshed,
                }
            }
            Err(e) => {
                error!(field = %field, error = %e, "customer field update failed");
                self.notices.error(failure_message(field.as_str()));
                UpdateOutcome::Failed(e)
            }
        }
    }
}

const fn validated_field(field: CustomerField) -> Option<ValidatedField> {
    match field {
        CustomerField::Nic => Some(ValidatedField::Nic),
        CustomerField::Phone => Some(ValidatedField::Phone),
        CustomerField::FirstDealDate => Some(ValidatedField::FirstDealDate),
        CustomerField::LastDealDate => Some(ValidatedField::LastDealDate),
        CustomerField::Name | CustomerField::Email | CustomerField::Address => None,
    }
}

/// Pre-flight: turn the draft value of `field` into an update, or store the
/// validation message on the form.
fn build_update(field: CustomerField, form: &mut CustomerForm) -> Result<CustomerUpdate, String> {
    let draft = form.draft();
    let result: Result<CustomerUpdate, String> = match field {
        CustomerField::Name => Ok(CustomerUpdate::Name(draft.name.trim().to_owned())),
        CustomerField::Email => Ok(CustomerUpdate::Email(draft.email.trim().to_owned())),
        CustomerField::Address => Ok(CustomerUpdate::Address(draft.address.clone())),
        CustomerField::Nic => Nic::parse(&draft.nic)
            .map(CustomerUpdate::Nic)
            .map_err(|e| e.to_string()),
        CustomerField::Phone => PhoneNumber::parse(&draft.phone_number)
            .map(CustomerUpdate::Phone)
            .map_err(|e| e.to_string()),
        CustomerField::FirstDealDate => match parse_date_input(&draft.first_deal_date) {
            Ok(Some(date)) => Ok(CustomerUpdate::FirstDealDate(date)),
            Ok(None) => Err(Required("First deal date").to_string()),
            Err(e) => Err(e.to_string()),
        },
        CustomerField::LastDealDate => match parse_date_input(&draft.last_deal_date) {
            Ok(Some(date)) => Ok(CustomerUpdate::LastDealDate(date)),
            Ok(None) => Err(Required("Last deal date").to_string()),
            Err(e) => Err(e.to_string()),
        },
    };

    if let (Err(message), Some(validated)) = (&result, validated_field(field)) {
        form.errors_mut().set(validated, message.clone());
    }
    result
}

/// Validate the add-customer form and create the record.
///
/// The service is not called when validation fails.
///
/// # Errors
///
/// Returns the field errors, or the backend error from the create call.
#[instrument(skip_all)]
pub async fn create_customer<S: CustomerService>(
    service: &S,
    form: &mut CustomerForm,
) -> Result<Customer, AdminError> {
    let new = form.submit()?;
    let customer = service.create(&new).await?;
    info!(customer_id = %customer.customer_id, "customer created");
    Ok(customer)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::notice::NoticeKind;
    use crate::testing::{FakeCustomers, customer};

    fn stored() -> Customer {
        customer(
            1,
            "Amal",
            r#"{"customerId": 0, "nic": "892345671V", "phoneNumber": "0711234567",
                "address": {"houseNo": "42", "street": "Palm Avenue", "city": "Colombo"}}"#,
        )
    }

    async fn editor() -> CustomerEditor<FakeCustomers> {
        CustomerEditor::load(FakeCustomers::with(vec![stored()]), CustomerId::new(1))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_name_update_posts_notice_and_merges() {
        let mut editor = editor().await;
        editor.form_mut().set_field("name", "Amal Perera").unwrap();

        let outcome = editor.update(CustomerField::Name).await;
        assert!(matches!(outcome, UpdateOutcome::Refreshed));
        let notice = editor.notices().visible().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, "Name updated successfully");
        assert_eq!(editor.form().draft().name, "Amal Perera");
        assert_eq!(editor.service().updates.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_phone_sends_nothing() {
        let mut editor = editor().await;
        editor.form_mut().set_field("phoneNumber", "0612345678").unwrap();

        let outcome = editor.update(CustomerField::Phone).await;
        assert!(matches!(outcome, UpdateOutcome::Rejected { .. }));
        assert!(editor.service().updates.lock().unwrap().is_empty());
        assert_eq!(
            editor.form().errors().get(ValidatedField::Phone),
            Some("Phone number must be 10 digits and start with 07 (e.g., 0712345678)")
        );
        assert!(editor.notices().visible().is_none());
    }

    #[tokio::test]
    async fn test_nic_update_relocates() {
        let mut editor = editor().await;
        editor.form_mut().set_field("nic", "199012345678").unwrap();

        match editor.update(CustomerField::Nic).await {
            UpdateOutcome::Relocated { nic } => assert_eq!(nic.as_str(), "199012345678"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_address_update_keeps_siblings() {
        let mut editor = editor().await;
        editor.form_mut().set_field("address.city", "Kandy").unwrap();

        assert!(editor.update(CustomerField::Address).await.is_saved());
        let updates = editor.service().updates.lock().unwrap();
        let CustomerUpdate::Address(address) = &updates[0] else {
            panic!("expected address update");
        };
        assert_eq!(address.house_no.as_deref(), Some("42"));
        assert_eq!(address.street.as_deref(), Some("Palm Avenue"));
        assert_eq!(address.city.as_deref(), Some("Kandy"));
    }

    #[tokio::test]
    async fn test_blank_deal_date_rejected() {
        let mut editor = editor().await;
        let outcome = editor.update(CustomerField::FirstDealDate).await;
        let UpdateOutcome::Rejected { message } = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(message, "First deal date is required");
    }

    #[tokio::test]
    async fn test_backend_failure_posts_error_notice() {
        let mut editor = CustomerEditor::from_record(FakeCustomers::failing(), &stored());
        let outcome = editor.update(CustomerField::Email).await;
        assert!(matches!(outcome, UpdateOutcome::Failed(_)));
        let notice = editor.notices().visible().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Failed to update email. Please try again.");
    }

    #[tokio::test]
    async fn test_create_with_invalid_nic_makes_no_call() {
        let service = FakeCustomers::default();
        let mut form = CustomerForm::new();
        form.set_field("nic", "1234").unwrap();

        let result = create_customer(&service, &mut form).await;
        let Err(AdminError::Form(errors)) = result else {
            panic!("expected field errors");
        };
        assert!(errors.get(ValidatedField::Nic).is_some());
        assert_eq!(
            form.errors().get(ValidatedField::Nic),
            Some("NIC must be either 9 digits followed by V/v or 12 digits")
        );
        assert!(service.creates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_sends_payload() {
        let service = FakeCustomers::default();
        let mut form = CustomerForm::new();
        form.set_field("name", "Kamal").unwrap();
        form.set_field("nic", "892345671V").unwrap();

        create_customer(&service, &mut form).await.unwrap();
        assert_eq!(service.creates.lock().unwrap()[0].nic.as_str(), "892345671V");
    }
}
