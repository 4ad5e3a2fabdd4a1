//! Integration test support for the rental admin client.
//!
//! [`MockBackend`] serves the rental REST API from memory on an ephemeral
//! local port and records every request it receives, so tests can assert on
//! exactly which endpoints were called with which parameters.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p rental-admin-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use rental_admin::AdminConfig;
use rental_admin::config::BackendConfig;
use rental_admin::notice::NOTICE_TTL;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// One request as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
struct Store {
    customers: Vec<Value>,
    employees: Vec<Value>,
    next_id: i64,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<Store>>;

/// In-memory rental backend bound to `127.0.0.1`.
#[derive(Debug, Clone)]
pub struct MockBackend {
    base_url: String,
    store: Shared,
}

impl MockBackend {
    /// Start the mock with the given customer and employee JSON records.
    pub async fn start(customers: Vec<Value>, employees: Vec<Value>) -> Self {
        let store = Arc::new(Mutex::new(Store {
            customers,
            employees,
            next_id: 1000,
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/Customer/all-Customers", get(list_customers))
            .route("/Customer/search-Customer", get(search_customers))
            .route("/Customer/Customer/{id}", get(get_customer))
            .route("/Customer/add-Customer", post(add_customer))
            .route("/Customer/delete-Customer/{id}", delete(delete_customer))
            .route("/Customer/get-Active-Customer-Count", get(active_count))
            .route("/Customer/{segment}/{id}", put(update_customer))
            .route("/employee/get-employee", get(list_employees))
            .route("/employee/search-employee", get(search_employees))
            .route("/employee/get-employee/{id}", get(get_employee))
            .route("/employee/add-employee", post(add_employee))
            .route("/employee/delete-employee/{id}", delete(delete_employee))
            .route("/employee/{segment}/{id}", put(update_employee))
            .with_state(Arc::clone(&store));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            store,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Client configuration pointing at this mock.
    #[must_use]
    pub fn config(&self) -> AdminConfig {
        AdminConfig {
            backend: BackendConfig::new(&self.base_url).unwrap(),
            notice_ttl: NOTICE_TTL,
        }
    }

    /// Every request received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.store.lock().unwrap().requests.clone()
    }

    /// Requests whose path starts with `prefix`.
    #[must_use]
    pub fn requests_to(&self, prefix: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path.starts_with(prefix))
            .collect()
    }

    /// Stored customer JSON by id.
    #[must_use]
    pub fn customer(&self, id: i64) -> Option<Value> {
        find(&self.store.lock().unwrap().customers, "customerId", id).cloned()
    }

    /// Stored employee JSON by id, including the write-only password.
    #[must_use]
    pub fn employee(&self, id: i64) -> Option<Value> {
        find(&self.store.lock().unwrap().employees, "employeeId", id).cloned()
    }
}

/// Customer JSON as the backend stores it.
#[must_use]
pub fn customer_json(id: i64, name: &str, nic: &str, city: &str) -> Value {
    json!({
        "customerId": id,
        "name": name,
        "nic": nic,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "phoneNumber": "0711234567",
        "address": {"houseNo": "1", "street": "Main Street", "city": city},
        "firstDateDeal": "2026-10-14",
        "lastDateDeal": "2026-10-16",
        "deleted": false
    })
}

/// Employee JSON as the backend stores it.
#[must_use]
pub fn employee_json(id: i64, name: &str, nic: &str, role: &str) -> Value {
    json!({
        "employeeId": id,
        "name": name,
        "nic": nic,
        "role": role,
        "phoneNumber": "0779876543",
        "email": "staff@example.com",
        "username": name.to_lowercase(),
        "password": "$2a$10$hash",
        "address": {"houseNo": "7", "street": "Temple Road", "city": "Galle"}
    })
}

// =============================================================================
// Handlers
// =============================================================================

fn find<'a>(records: &'a [Value], key: &str, id: i64) -> Option<&'a Value> {
    records.iter().find(|r| r[key].as_i64() == Some(id))
}

fn find_mut<'a>(records: &'a mut [Value], key: &str, id: i64) -> Option<&'a mut Value> {
    records.iter_mut().find(|r| r[key].as_i64() == Some(id))
}

fn record(
    store: &Shared,
    method: Method,
    uri: &Uri,
    query: &HashMap<String, String>,
    body: Option<Value>,
) {
    store.lock().unwrap().requests.push(RecordedRequest {
        method,
        path: uri.path().to_owned(),
        query: query.clone(),
        body,
    });
}

fn matches_term(record: &Value, term: &str) -> bool {
    let term = term.to_lowercase();
    ["name", "nic"].iter().any(|key| {
        record[*key]
            .as_str()
            .is_some_and(|v| v.to_lowercase().contains(&term))
    })
}

/// The employee view never includes the password.
fn public_employee(employee: &Value) -> Value {
    let mut employee = employee.clone();
    if let Some(map) = employee.as_object_mut() {
        map.remove("password");
    }
    employee
}

async fn list_customers(State(store): State<Shared>, uri: Uri) -> Json<Value> {
    record(&store, Method::GET, &uri, &HashMap::new(), None);
    Json(Value::Array(store.lock().unwrap().customers.clone()))
}

async fn search_customers(
    State(store): State<Shared>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    record(&store, Method::GET, &uri, &query, None);
    let term = query.get("search").cloned().unwrap_or_default();
    let store = store.lock().unwrap();
    Json(Value::Array(
        store
            .customers
            .iter()
            .filter(|c| matches_term(c, &term))
            .cloned()
            .collect(),
    ))
}

/// Missing records answer `200` with an empty body, like the real backend.
async fn get_customer(State(store): State<Shared>, uri: Uri, Path(id): Path<i64>) -> Response {
    record(&store, Method::GET, &uri, &HashMap::new(), None);
    let store = store.lock().unwrap();
    find(&store.customers, "customerId", id)
        .map_or_else(|| StatusCode::OK.into_response(), |c| Json(c.clone()).into_response())
}

async fn add_customer(State(store): State<Shared>, uri: Uri, Json(mut body): Json<Value>) -> Json<Value> {
    record(&store, Method::POST, &uri, &HashMap::new(), Some(body.clone()));
    let mut store = store.lock().unwrap();
    store.next_id += 1;
    body["customerId"] = json!(store.next_id);
    body["deleted"] = json!(false);
    store.customers.push(body.clone());
    Json(body)
}

async fn delete_customer(State(store): State<Shared>, uri: Uri, Path(id): Path<i64>) -> StatusCode {
    record(&store, Method::DELETE, &uri, &HashMap::new(), None);
    let mut store = store.lock().unwrap();
    if let Some(customer) = find_mut(&mut store.customers, "customerId", id) {
        customer["deleted"] = json!(true);
    }
    StatusCode::OK
}

async fn active_count(State(store): State<Shared>, uri: Uri) -> Json<usize> {
    record(&store, Method::GET, &uri, &HashMap::new(), None);
    let store = store.lock().unwrap();
    Json(
        store
            .customers
            .iter()
            .filter(|c| !c["deleted"].as_bool().unwrap_or(false))
            .count(),
    )
}

fn parse_body(body: &Bytes) -> Option<Value> {
    serde_json::from_slice(body).ok()
}

async fn update_customer(
    State(store): State<Shared>,
    uri: Uri,
    Path((segment, id)): Path<(String, i64)>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let body = parse_body(&body);
    record(&store, Method::PUT, &uri, &query, body.clone());

    let (json_key, value) = match segment.as_str() {
        "update-Customer-name" => ("name", query.get("name").map(|v| json!(v))),
        "update-Customer-Nic" => ("nic", query.get("newNic").map(|v| json!(v))),
        "update-Customer-email" => ("email", query.get("email").map(|v| json!(v))),
        "update-Customer-phone" => ("phoneNumber", query.get("phoneNumber").map(|v| json!(v))),
        "update-Customer-fristdealdate" => {
            ("firstDateDeal", query.get("fristDealDate").map(|v| json!(v)))
        }
        "update-Customer-lastdealdate" => {
            ("lastDateDeal", query.get("lastDealDate").map(|v| json!(v)))
        }
        "update-Customer-address" => ("address", body),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    let Some(value) = value else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let mut store = store.lock().unwrap();
    match find_mut(&mut store.customers, "customerId", id) {
        Some(customer) => {
            customer[json_key] = value;
            Json(customer.clone()).into_response()
        }
        None => StatusCode::OK.into_response(),
    }
}

async fn list_employees(State(store): State<Shared>, uri: Uri) -> Json<Value> {
    record(&store, Method::GET, &uri, &HashMap::new(), None);
    let store = store.lock().unwrap();
    Json(Value::Array(store.employees.iter().map(public_employee).collect()))
}

async fn search_employees(
    State(store): State<Shared>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    record(&store, Method::GET, &uri, &query, None);
    let term = query.get("search").cloned().unwrap_or_default();
    let store = store.lock().unwrap();
    Json(Value::Array(
        store
            .employees
            .iter()
            .filter(|e| matches_term(e, &term))
            .map(public_employee)
            .collect(),
    ))
}

async fn get_employee(State(store): State<Shared>, uri: Uri, Path(id): Path<i64>) -> Response {
    record(&store, Method::GET, &uri, &HashMap::new(), None);
    let store = store.lock().unwrap();
    find(&store.employees, "employeeId", id).map_or_else(
        || StatusCode::OK.into_response(),
        |e| Json(public_employee(e)).into_response(),
    )
}

async fn add_employee(State(store): State<Shared>, uri: Uri, Json(mut body): Json<Value>) -> Json<Value> {
    record(&store, Method::POST, &uri, &HashMap::new(), Some(body.clone()));
    let mut store = store.lock().unwrap();
    store.next_id += 1;
    body["employeeId"] = json!(store.next_id);
    store.employees.push(body.clone());
    Json(public_employee(&body))
}

async fn delete_employee(State(store): State<Shared>, uri: Uri, Path(id): Path<i64>) -> StatusCode {
    record(&store, Method::DELETE, &uri, &HashMap::new(), None);
    let mut store = store.lock().unwrap();
    store.employees.retain(|e| e["employeeId"].as_i64() != Some(id));
    StatusCode::OK
}

async fn update_employee(
    State(store): State<Shared>,
    uri: Uri,
    Path((segment, id)): Path<(String, i64)>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let body = parse_body(&body);
    record(&store, Method::PUT, &uri, &query, body.clone());

    let (json_key, value) = match segment.as_str() {
        "update-employee-Name" => ("name", query.get("name").map(|v| json!(v))),
        "update-employee-Nic" => ("nic", query.get("newNic").map(|v| json!(v))),
        "update-employee-Email" => ("email", query.get("email").map(|v| json!(v))),
        "update-employee-Phone" => ("phoneNumber", query.get("phone").map(|v| json!(v))),
        "update-employee-Password" => ("password", query.get("password").map(|v| json!(v))),
        "update-employee-Role" => ("role", query.get("Role").map(|v| json!(v))),
        "update-employee-Address" => ("address", body),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    let Some(value) = value else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let mut store = store.lock().unwrap();
    match find_mut(&mut store.employees, "employeeId", id) {
        Some(employee) => {
            employee[json_key] = value;
            Json(public_employee(employee)).into_response()
        }
        None => StatusCode::OK.into_response(),
    }
}
