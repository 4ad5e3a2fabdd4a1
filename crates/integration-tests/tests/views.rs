//! Directory and dashboard flows against the mock backend.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rental_admin::AppState;
use rental_admin::dashboard::{Period, load_dashboard};
use rental_admin::directory::Directory;
use rental_admin_core::CustomerId;
use rental_admin_integration_tests::{MockBackend, customer_json, employee_json};

async fn setup() -> (MockBackend, AppState) {
    let cities = ["Colombo", "Kandy", "Galle", "Jaffna", "Matara", "Negombo", "Colombo"];
    let customers = cities
        .iter()
        .enumerate()
        .map(|(i, city)| {
            let id = i64::try_from(i).unwrap() + 1;
            customer_json(id, &format!("Customer {id}"), &format!("90000000{id}V"), city)
        })
        .collect();
    let employees = (1..=6)
        .map(|i| employee_json(100 + i, &format!("Staff{i}"), "199912345678", "Clerk"))
        .collect();
    let mock = MockBackend::start(customers, employees).await;
    let state = AppState::new(mock.config()).unwrap();
    (mock, state)
}

#[tokio::test]
async fn test_directory_search_and_delete() {
    let (mock, state) = setup().await;
    let mut directory = Directory::new(state.customers());

    directory.refresh().await.unwrap();
    assert_eq!(directory.rows().len(), 7);

    directory.search("customer 3").await.unwrap();
    assert_eq!(directory.rows().len(), 1);

    directory.search("").await.unwrap();
    assert_eq!(directory.rows().len(), 7);
    assert_eq!(mock.requests_to("/Customer/all-Customers").len(), 2);

    directory.delete(CustomerId::new(3)).await.unwrap();
    assert_eq!(directory.rows().len(), 6);
    assert!(directory.rows().iter().all(|c| c.customer_id != CustomerId::new(3)));
    assert_eq!(directory.error(), None);
}

#[tokio::test]
async fn test_restore_is_local_only() {
    let (mock, state) = setup().await;
    let mut directory = Directory::new(state.customers());
    directory.refresh().await.unwrap();
    let before = mock.requests().len();

    assert!(directory.restore(CustomerId::new(1)));
    assert_eq!(mock.requests().len(), before);
}

#[tokio::test]
async fn test_dashboard_snapshot() {
    let (_mock, state) = setup().await;
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

    let snapshot = load_dashboard(
        &state.customers(),
        &state.employees(),
        Period::Month,
        today,
        &mut StdRng::seed_from_u64(11),
    )
    .await
    .unwrap();

    assert_eq!(snapshot.total_customers, 7);
    assert_eq!(snapshot.active_customers, 7);
    assert_eq!(snapshot.new_this_week, 7);
    assert_eq!(snapshot.total_employees, 6);
    assert_eq!(snapshot.recent_employees.len(), 5);
    assert_eq!(snapshot.recent_customers.len(), 5);
    assert_eq!(snapshot.series.len(), 31);

    // six distinct cities fold into four plus "Other"
    assert_eq!(snapshot.locations.len(), 5);
    assert_eq!(snapshot.locations[0].name, "Colombo");
    assert_eq!(snapshot.locations[0].count, 2);
    assert_eq!(snapshot.locations[4].name, "Other");
    assert_eq!(snapshot.locations[4].count, 2);
}
