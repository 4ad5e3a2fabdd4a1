//! Employee endpoints under `/employee`.

use rental_admin_core::{Address, Employee, EmployeeId, NewEmployee};
use tracing::instrument;

use super::endpoints::Param;
use super::{ApiError, BackendClient, EmployeeService, EmployeeUpdate, RecordSource};

const PREFIX: &str = "/employee";

/// Employee service backed by the REST API.
#[derive(Debug, Clone)]
pub struct Employees {
    client: BackendClient,
}

impl Employees {
    pub(super) const fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl RecordSource for Employees {
    type Id = EmployeeId;
    type Record = Employee;

    const NOUN: &'static str = "employee";
    const PLURAL: &'static str = "employees";

    fn record_id(record: &Employee) -> EmployeeId {
        record.employee_id
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        let employees: Option<Vec<Employee>> = self
            .client
            .get(&format!("{PREFIX}/get-employee"), &[])
            .await?;
        Ok(employees.unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn search(&self, term: &str) -> Result<Vec<Employee>, ApiError> {
        let employees: Option<Vec<Employee>> = self
            .client
            .get(&format!("{PREFIX}/search-employee"), &[("search", term)])
            .await?;
        Ok(employees.unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn fetch(&self, id: EmployeeId) -> Result<Employee, ApiError> {
        let path = format!("{PREFIX}/get-employee/{id}");
        let employee: Option<Employee> = self.client.get(&path, &[]).await?;
        employee.ok_or(ApiError::NotFound(path))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EmployeeId) -> Result<(), ApiError> {
        self.client
            .delete(&format!("{PREFIX}/delete-employee/{id}"))
            .await
    }
}

impl EmployeeService for Employees {
    #[instrument(skip(self, new), fields(username = %new.username))]
    async fn create(&self, new: &NewEmployee) -> Result<Employee, ApiError> {
        self.client
            .post(&format!("{PREFIX}/add-employee"), new)
            .await
    }

    #[instrument(skip(self, update), fields(field = %update.field()))]
    async fn update(&self, id: EmployeeId, update: &EmployeeUpdate) -> Result<Employee, ApiError> {
        let endpoint = update.field().endpoint();
        let path = format!("{PREFIX}/{}/{id}", endpoint.segment);

        let value = update.query_value();
        let query: Vec<(&str, &str)> = match (endpoint.param, value.as_deref()) {
            (Param::Query(key), Some(value)) => vec![(key, value)],
            _ => Vec::new(),
        };

        let employee: Option<Employee> = self
            .client
            .put::<_, Address>(&path, &query, update.body())
            .await?;
        employee.ok_or(ApiError::NotFound(path))
    }
}
