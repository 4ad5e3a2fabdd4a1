//! In-memory services for unit tests.

#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use rental_admin_core::{Customer, CustomerId, Employee, EmployeeId, NewCustomer, NewEmployee};

use crate::backend::{
    ApiError, CustomerService, CustomerUpdate, EmployeeService, EmployeeUpdate, RecordSource,
};

/// Customer store that records every call it receives.
#[derive(Debug, Default)]
pub struct FakeCustomers {
    pub records: Mutex<Vec<Customer>>,
    pub updates: Mutex<Vec<CustomerUpdate>>,
    pub creates: Mutex<Vec<NewCustomer>>,
    pub deletes: Mutex<Vec<CustomerId>>,
    pub fail: bool,
}

impl FakeCustomers {
    pub fn with(records: Vec<Customer>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), ApiError> {
        if self.fail {
            return Err(ApiError::Api {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(())
    }
}

pub fn customer(id: i64, name: &str, json: &str) -> Customer {
    let mut customer: Customer = serde_json::from_str(json).unwrap();
    customer.customer_id = CustomerId::new(id);
    customer.name = Some(name.to_string());
    customer
}

impl RecordSource for FakeCustomers {
    type Id = CustomerId;
    type Record = Customer;

    const NOUN: &'static str = "customer";
    const PLURAL: &'static str = "customers";

    fn record_id(record: &Customer) -> CustomerId {
        record.customer_id
    }

    async fn list(&self) -> Result<Vec<Customer>, ApiError> {
        self.check()?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn search(&self, term: &str) -> Result<Vec<Customer>, ApiError> {
        self.check()?;
        let term = term.to_lowercase();
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|c| {
                [&c.name, &c.nic]
                    .into_iter()
                    .flatten()
                    .any(|v| v.to_lowercase().contains(&term))
            })
            .cloned()
            .collect())
    }

    async fn fetch(&self, id: CustomerId) -> Result<Customer, ApiError> {
        self.check()?;
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.customer_id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: CustomerId) -> Result<(), ApiError> {
        self.check()?;
        self.deletes.lock().unwrap().push(id);
        Ok(())
    }
}

impl CustomerService for FakeCustomers {
    async fn create(&self, new: &NewCustomer) -> Result<Customer, ApiError> {
        self.check()?;
        self.creates.lock().unwrap().push(new.clone());
        Ok(customer(99, &new.name, r#"{"customerId": 0}"#))
    }

    async fn update(&self, id: CustomerId, update: &CustomerUpdate) -> Result<Customer, ApiError> {
        self.check()?;
        self.updates.lock().unwrap().push(update.clone());
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|c| c.customer_id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        match update {
            CustomerUpdate::Name(v) => record.name = Some(v.clone()),
            CustomerUpdate::Nic(v) => record.nic = Some(v.to_string()),
            CustomerUpdate::Email(v) => record.email = Some(v.clone()),
            CustomerUpdate::Phone(v) => record.phone_number = Some(v.to_string()),
            CustomerUpdate::Address(v) => record.address = Some(v.clone()),
            CustomerUpdate::FirstDealDate(v) => record.first_deal_date = Some(*v),
            CustomerUpdate::LastDealDate(v) => record.last_deal_date = Some(*v),
        }
        Ok(record.clone())
    }

    async fn active_count(&self) -> Result<u64, ApiError> {
        self.check()?;
        let records = self.records.lock().unwrap();
        Ok(u64::try_from(records.iter().filter(|c| !c.deleted).count()).unwrap())
    }
}

/// Employee store that records every call it receives.
#[derive(Debug, Default)]
pub struct FakeEmployees {
    pub records: Mutex<Vec<Employee>>,
    pub updates: Mutex<Vec<EmployeeUpdate>>,
    pub fail: bool,
}

impl FakeEmployees {
    pub fn with(records: Vec<Employee>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }
}

pub fn employee(id: i64, name: &str) -> Employee {
    let mut employee: Employee = serde_json::from_str(r#"{"employeeId": 0}"#).unwrap();
    employee.employee_id = EmployeeId::new(id);
    employee.name = Some(name.to_string());
    employee
}

impl RecordSource for FakeEmployees {
    type Id = EmployeeId;
    type Record = Employee;

    const NOUN: &'static str = "employee";
    const PLURAL: &'static str = "employees";

    fn record_id(record: &Employee) -> EmployeeId {
        record.employee_id
    }

    async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        if self.fail {
            return Err(ApiError::Unauthorized);
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn search(&self, term: &str) -> Result<Vec<Employee>, ApiError> {
        let term = term.to_lowercase();
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|e| {
                e.name
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&term))
            })
            .collect())
    }

    async fn fetch(&self, id: EmployeeId) -> Result<Employee, ApiError> {
        self.list()
            .await?
            .into_iter()
            .find(|e| e.employee_id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    async fn delete(&self, _id: EmployeeId) -> Result<(), ApiError> {
        Ok(())
    }
}

impl EmployeeService for FakeEmployees {
    async fn create(&self, new: &NewEmployee) -> Result<Employee, ApiError> {
        Ok(employee(50, &new.name))
    }

    async fn update(&self, id: EmployeeId, update: &EmployeeUpdate) -> Result<Employee, ApiError> {
        if self.fail {
            return Err(ApiError::Unauthorized);
        }
        self.updates.lock().unwrap().push(update.clone());
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|e| e.employee_id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        match update {
            EmployeeUpdate::Name(v) => record.name = Some(v.clone()),
            EmployeeUpdate::Nic(v) => record.nic = Some(v.to_string()),
            EmployeeUpdate::Email(v) => record.email = Some(v.to_string()),
            EmployeeUpdate::Phone(v) => record.phone_number = Some(v.to_string()),
            EmployeeUpdate::Address(v) => record.address = Some(v.clone()),
            EmployeeUpdate::Role(v) => record.role = Some(*v),
            EmployeeUpdate::Password(_) => {}
        }
        Ok(record.clone())
    }
}
