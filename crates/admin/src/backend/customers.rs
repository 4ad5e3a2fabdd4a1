//! Customer endpoints under `/Customer`.

use rental_admin_core::{Address, Customer, CustomerId, NewCustomer};
use tracing::instrument;

use super::endpoints::Param;
use super::{ApiError, BackendClient, CustomerService, CustomerUpdate, RecordSource};

const PREFIX: &str = "/Customer";

/// Customer service backed by the REST API.
#[derive(Debug, Clone)]
pub struct Customers {
    client: BackendClient,
}

impl Customers {
    pub(super) const fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl RecordSource for Customers {
    type Id = CustomerId;
    type Record = Customer;

    const NOUN: &'static str = "customer";
    const PLURAL: &'static str = "customers";

    fn record_id(record: &Customer) -> CustomerId {
        record.customer_id
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Customer>, ApiError> {
        let customers: Option<Vec<Customer>> = self
            .client
            .get(&format!("{PREFIX}/all-Customers"), &[])
            .await?;
        Ok(customers.unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn search(&self, term: &str) -> Result<Vec<Customer>, ApiError> {
        let customers: Option<Vec<Customer>> = self
            .client
            .get(&format!("{PREFIX}/search-Customer"), &[("search", term)])
            .await?;
        Ok(customers.unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn fetch(&self, id: CustomerId) -> Result<Customer, ApiError> {
        let path = format!("{PREFIX}/Customer/{id}");
        let customer: Option<Customer> = self.client.get(&path, &[]).await?;
        customer.ok_or(ApiError::NotFound(path))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CustomerId) -> Result<(), ApiError> {
        self.client
            .delete(&format!("{PREFIX}/delete-Customer/{id}"))
            .await
    }
}

impl CustomerService for Customers {
    #[instrument(skip(self, new), fields(nic = %new.nic))]
    async fn create(&self, new: &NewCustomer) -> Result<Customer, ApiError> {
        self.client
            .post(&format!("{PREFIX}/add-Customer"), new)
            .await
    }

    #[instrument(skip(self, update), fields(field = %update.field()))]
    async fn update(&self, id: CustomerId, update: &CustomerUpdate) -> Result<Customer, ApiError> {
        let endpoint = update.field().endpoint();
        let path = format!("{PREFIX}/{}/{id}", endpoint.segment);

        let value = update.query_value();
        let query: Vec<(&str, &str)> = match (endpoint.param, value.as_deref()) {
            (Param::Query(key), Some(value)) => vec![(key, value)],
            _ => Vec::new(),
        };

        let customer: Option<Customer> = self
            .client
            .put::<_, Address>(&path, &query, update.body())
            .await?;
        customer.ok_or(ApiError::NotFound(path))
    }

    #[instrument(skip(self))]
    async fn active_count(&self) -> Result<u64, ApiError> {
        self.client
            .get(&format!("{PREFIX}/get-Active-Customer-Count"), &[])
            .await
    }
}
