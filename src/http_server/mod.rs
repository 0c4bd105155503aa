//! HTTP surface for rosterdb
//!
//! Axum server exposing the employee operations:
//!
//! - `GET /` - liveness confirmation text
//! - `GET /employees` - list all records
//! - `GET /employees/{id_number}` - fetch one record
//! - `POST /employees` - create one record

pub mod config;
pub mod employee_routes;
pub mod errors;
pub mod server;

pub use config::ServerConfig;
pub use employee_routes::{employee_routes, AppState, EmployeeListResponse};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
