//! Editor and form flows against the mock backend.

#![allow(clippy::unwrap_used)]

use rental_admin::AppState;
use rental_admin::AdminError;
use rental_admin::backend::{CustomerField, EmployeeField};
use rental_admin::dispatch::{
    CustomerEditor, EmployeeEditor, UpdateOutcome, create_customer, create_employee,
};
use rental_admin::forms::{CustomerForm, EmployeeForm, ValidatedField};
use rental_admin::notice::NoticeKind;
use rental_admin_core::{CustomerId, EmployeeId};
use rental_admin_integration_tests::{MockBackend, customer_json, employee_json};

async fn setup() -> (MockBackend, AppState) {
    let mock = MockBackend::start(
        vec![customer_json(1, "Amal Perera", "892345671V", "Colombo")],
        vec![employee_json(10, "Nimal", "199912345678", "Clerk")],
    )
    .await;
    let state = AppState::new(mock.config()).unwrap();
    (mock, state)
}

#[tokio::test]
async fn test_nic_update_relocates_and_sends_one_call() {
    let (mock, state) = setup().await;
    let mut editor = CustomerEditor::load(state.customers(), CustomerId::new(1))
        .await
        .unwrap();
    editor.form_mut().set_field("nic", "199012345678").unwrap();

    let outcome = editor.update(CustomerField::Nic).await;
    let UpdateOutcome::Relocated { nic } = outcome else {
        panic!("expected relocation, got {outcome:?}");
    };
    assert_eq!(nic.as_str(), "199012345678");
    assert_eq!(editor.notices().visible().unwrap().message, "NIC updated successfully");

    let puts = mock.requests_to("/Customer/update-");
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].query.len(), 1);
}

#[tokio::test]
async fn test_invalid_phone_makes_no_call() {
    let (mock, state) = setup().await;
    let mut editor = CustomerEditor::load(state.customers(), CustomerId::new(1))
        .await
        .unwrap();
    editor.form_mut().set_field("phoneNumber", "12345").unwrap();

    let outcome = editor.update(CustomerField::Phone).await;
    assert!(matches!(outcome, UpdateOutcome::Rejected { .. }));
    assert!(editor.form().errors().get(ValidatedField::Phone).is_some());
    assert!(mock.requests_to("/Customer/update-").is_empty());
}

#[tokio::test]
async fn test_sequential_updates_commit_independently() {
    let (mock, state) = setup().await;
    let mut editor = CustomerEditor::load(state.customers(), CustomerId::new(1))
        .await
        .unwrap();

    editor.form_mut().set_field("name", "Amal K. Perera").unwrap();
    assert!(editor.update(CustomerField::Name).await.is_saved());

    editor.form_mut().set_field("phoneNumber", "0612345678").unwrap();
    assert!(!editor.update(CustomerField::Phone).await.is_saved());

    editor.form_mut().set_field("address.street", "Galle Road").unwrap();
    assert!(editor.update(CustomerField::Address).await.is_saved());

    let stored = mock.customer(1).unwrap();
    assert_eq!(stored["name"], "Amal K. Perera");
    assert_eq!(stored["phoneNumber"], "0711234567");
    assert_eq!(stored["address"]["street"], "Galle Road");
    assert_eq!(stored["address"]["city"], "Colombo");
    assert_eq!(mock.requests_to("/Customer/update-").len(), 2);
}

#[tokio::test]
async fn test_password_mismatch_makes_no_call() {
    let (mock, state) = setup().await;
    let mut editor = EmployeeEditor::load(state.employees(), EmployeeId::new(10))
        .await
        .unwrap();
    editor.form_mut().set_field("password", "Abc123!@").unwrap();
    editor.form_mut().set_field("confirmPassword", "Abc123!#").unwrap();

    let outcome = editor.update(EmployeeField::Password).await;
    assert!(matches!(outcome, UpdateOutcome::Rejected { ref message } if message == "Passwords do not match"));
    assert!(mock.requests_to("/employee/update-").is_empty());
}

#[tokio::test]
async fn test_password_update_goes_through_query() {
    let (mock, state) = setup().await;
    let mut editor = EmployeeEditor::load(state.employees(), EmployeeId::new(10))
        .await
        .unwrap();
    editor.form_mut().set_field("password", "Abc123!@").unwrap();
    editor.form_mut().set_field("confirmPassword", "Abc123!@").unwrap();

    assert!(editor.update(EmployeeField::Password).await.is_saved());
    let request = mock.requests_to("/employee/update-employee-Password/10").remove(0);
    assert_eq!(request.query["password"], "Abc123!@");
    assert_eq!(editor.notices().visible().unwrap().kind, NoticeKind::Success);
}

#[tokio::test]
async fn test_update_of_missing_record_fails_with_notice() {
    let (_mock, state) = setup().await;
    let record = serde_json::from_value(customer_json(77, "Ghost", "892345671V", "Jaffna")).unwrap();
    let mut editor = CustomerEditor::from_record(state.customers(), &record);

    let outcome = editor.update(CustomerField::Email).await;
    assert!(matches!(outcome, UpdateOutcome::Failed(_)));
    let notice = editor.notices().visible().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Failed to update email. Please try again.");
}

#[tokio::test]
async fn test_create_customer_with_invalid_nic_sends_nothing() {
    let (mock, state) = setup().await;
    let mut form = CustomerForm::new();
    form.set_field("name", "Ruwan").unwrap();
    form.set_field("nic", "95123456").unwrap();

    let result = create_customer(&state.customers(), &mut form).await;
    assert!(matches!(result, Err(AdminError::Form(_))));
    assert!(form.errors().get(ValidatedField::Nic).is_some());
    assert!(mock.requests_to("/Customer/add-Customer").is_empty());
}

#[tokio::test]
async fn test_create_employee_round_trip() {
    let (mock, state) = setup().await;
    let mut form = EmployeeForm::new();
    for (path, value) in [
        ("name", "Sunil Fernando"),
        ("nic", "198812345678"),
        ("role", "Delivery"),
        ("phoneNumber", "077 555 1234"),
        ("email", "sunil@example.com"),
        ("username", "sunil"),
        ("password", "Secret#99"),
        ("confirmPassword", "Secret#99"),
        ("address.city", "Matara"),
    ] {
        form.set_field(path, value).unwrap();
    }
    assert_eq!(form.progress(), 100);

    let employee = create_employee(&state.employees(), &mut form).await.unwrap();
    assert_eq!(employee.name.as_deref(), Some("Sunil Fernando"));

    let body = mock.requests_to("/employee/add-employee").remove(0).body.unwrap();
    assert_eq!(body["phoneNumber"], "0775551234");
    assert_eq!(body["role"], "Delivery");
    assert_eq!(body["password"], "Secret#99");
    assert_eq!(body["address"]["city"], "Matara");
}
