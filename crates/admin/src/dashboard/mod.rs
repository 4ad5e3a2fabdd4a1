//! Dashboard figures.
//!
//! Totals and the recent lists come from the backend; chart series are
//! synthetic (see [`series`]).

pub mod metrics;
pub mod series;

pub use metrics::{LocationBucket, location_breakdown, new_customers_this_week, recent_customers};
pub use series::{Period, PeriodError, SeriesPoint, WeekdayActivity, synthetic_series, weekday_activity};

use chrono::NaiveDate;
use rand::Rng;
use rental_admin_core::{Customer, Employee};
use thiserror::Error;
use tracing::{error, instrument};

use crate::backend::{ApiError, CustomerService, EmployeeService};

/// Rows shown in each "recent" list.
pub const RECENT_LIMIT: usize = 5;

/// Any backend failure while loading the dashboard.
#[derive(Debug, Error)]
#[error("Failed to load dashboard data")]
pub struct DashboardError(#[source] pub ApiError);

/// Everything the dashboard shows.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub period: Period,
    pub total_customers: usize,
    pub total_employees: usize,
    pub active_customers: u64,
    pub new_this_week: usize,
    pub recent_customers: Vec<Customer>,
    /// First employees in backend order.
    pub recent_employees: Vec<Employee>,
    pub locations: Vec<LocationBucket>,
    pub series: Vec<SeriesPoint>,
    pub weekdays: Vec<WeekdayActivity>,
}

impl DashboardSnapshot {
    /// Assemble a snapshot from already fetched data.
    pub fn build<R: Rng>(
        customers: &[Customer],
        employees: &[Employee],
        active_customers: u64,
        period: Period,
        today: NaiveDate,
        rng: &mut R,
    ) -> Self {
        Self {
            period,
            total_customers: customers.len(),
            total_employees: employees.len(),
            active_customers,
            new_this_week: new_customers_this_week(customers, today),
            recent_customers: recent_customers(customers, RECENT_LIMIT),
            recent_employees: employees.iter().take(RECENT_LIMIT).cloned().collect(),
            locations: location_breakdown(customers),
            series: synthetic_series(period, today, rng),
            weekdays: weekday_activity(rng),
        }
    }
}

/// Fetch customers, employees and the active count concurrently and build
/// the dashboard.
///
/// # Errors
///
/// Returns [`DashboardError`] if any of the three calls fails.
#[instrument(skip(customers, employees, rng))]
pub async fn load_dashboard<C, E, R>(
    customers: &C,
    employees: &E,
    period: Period,
    today: NaiveDate,
    rng: &mut R,
) -> Result<DashboardSnapshot, DashboardError>
where
    C: CustomerService,
    E: EmployeeService,
    R: Rng,
{
    let (customer_list, employee_list, active) = tokio::join!(
        customers.list(),
        employees.list(),
        customers.active_count()
    );

    let fetched = customer_list.and_then(|c| employee_list.map(|e| (c, e)));
    let ((customer_list, employee_list), active) =
        match fetched.and_then(|lists| active.map(|n| (lists, n))) {
            Ok(data) => data,
            Err(e) => {
                error!(error = %e, "failed to load dashboard data");
                return Err(DashboardError(e));
            }
        };

    Ok(DashboardSnapshot::build(
        &customer_list,
        &employee_list,
        active,
        period,
        today,
        rng,
    ))
}
