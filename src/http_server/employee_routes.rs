//! Employee HTTP routes
//!
//! The three operations: list all, fetch one, create one. Each handler is a
//! direct translation between the wire payloads and the repository; the
//! repository arrives through shared state, injected at router build time.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{Employee, EmployeeRecord};
use crate::repository::EmployeeRepository;

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// State shared across employee handlers
pub struct AppState {
    pub repository: Arc<dyn EmployeeRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }
}

// ==================
// Wire Types
// ==================

/// Body of `GET /employees`
#[derive(Debug, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<EmployeeRecord>,
}

// ==================
// Routes
// ==================

/// Build the employee router
pub fn employee_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/employees", get(list_employees))
        .route("/employees", post(create_employee))
        .route("/employees/{id_number}", get(get_employee))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Liveness confirmation at the root path
async fn index_handler() -> &'static str {
    "Congrats - You have reached the main url index"
}

/// List every stored employee, in insertion order
async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<EmployeeListResponse>> {
    let employees = state.repository.fetch_all()?;
    let records = employees.iter().map(Employee::to_record).collect();

    Ok(Json(EmployeeListResponse { employees: records }))
}

/// Fetch a single employee by identity.
///
/// An absent identity is an explicit 404, never a fault in the handling
/// path. A path segment that does not parse as an integer is a 400.
async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id_number): Path<String>,
) -> ApiResult<Json<EmployeeRecord>> {
    let id_number: i64 = id_number
        .parse()
        .map_err(|_| ApiError::InvalidIdentity(id_number.clone()))?;

    match state.repository.fetch_by_id(id_number)? {
        Some(employee) => Ok(Json(employee.to_record())),
        None => Err(ApiError::NotFound(id_number)),
    }
}

/// Create an employee.
///
/// All three fields are mandatory. The record is durably persisted before
/// the response; the response body is the record as re-fetched from the
/// repository, so the caller sees exactly what was stored.
async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<EmployeeRecord>> {
    let first_name = require_string(&body, "first_name")?;
    let last_name = require_string(&body, "last_name")?;
    let id_number = require_identity(&body)?;

    let employee = Employee::new(first_name, last_name, id_number);
    state.repository.insert(employee)?;

    let stored = state
        .repository
        .fetch_by_id(id_number)?
        .ok_or_else(|| ApiError::Storage("created record missing on re-fetch".to_string()))?;

    Ok(Json(stored.to_record()))
}

fn require_string<'a>(body: &'a Value, field: &'static str) -> ApiResult<&'a str> {
    body.get(field)
        .ok_or(ApiError::MissingField(field))?
        .as_str()
        .ok_or_else(|| ApiError::InvalidBody(format!("{} must be a string", field)))
}

fn require_identity(body: &Value) -> ApiResult<i64> {
    body.get("id_number")
        .ok_or(ApiError::MissingField("id_number"))?
        .as_i64()
        .ok_or_else(|| ApiError::InvalidBody("id_number must be an integer".to_string()))
}
