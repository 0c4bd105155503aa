//! Outbound HTTP calls to the employee service

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::model::EmployeeRecord;

/// Errors raised while setting the client up.
///
/// Request-time failures are deliberately not errors: they all collapse to
/// "no result" so the caller only ever branches on absence.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to start client runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
struct EmployeeListPayload {
    employees: Vec<EmployeeRecord>,
}

/// HTTP client for the employee service
pub struct EmployeeClient {
    base_url: String,
    http: Client,
}

impl EmployeeClient {
    /// Build a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create an employee. Any non-200 outcome yields `None`.
    pub async fn post_employee(
        &self,
        first_name: &str,
        last_name: &str,
        id_number: i64,
    ) -> Option<EmployeeRecord> {
        let url = format!("{}/employees", self.base_url);
        let body = serde_json::json!({
            "first_name": first_name,
            "last_name": last_name,
            "id_number": id_number,
        });

        let response = self.http.post(&url).json(&body).send().await.ok()?;
        if response.status() != StatusCode::OK {
            return None;
        }
        response.json().await.ok()
    }

    /// Fetch every employee. Any non-200 outcome yields `None`.
    pub async fn get_all_employees(&self) -> Option<Vec<EmployeeRecord>> {
        let url = format!("{}/employees", self.base_url);

        let response = self.http.get(&url).send().await.ok()?;
        if response.status() != StatusCode::OK {
            return None;
        }
        let payload: EmployeeListPayload = response.json().await.ok()?;
        Some(payload.employees)
    }

    /// Fetch a single employee by identity. Any non-200 outcome yields
    /// `None`, including a 404 for an unknown identity.
    pub async fn get_employee(&self, id_number: i64) -> Option<EmployeeRecord> {
        let url = format!("{}/employees/{}", self.base_url, id_number);

        let response = self.http.get(&url).send().await.ok()?;
        if response.status() != StatusCode::OK {
            return None;
        }
        response.json().await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = EmployeeClient::new("http://127.0.0.1:5000/").unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_list_payload_shape() {
        let payload: EmployeeListPayload = serde_json::from_str(
            r#"{"employees": [{"id_number": 1, "first_name": "Al", "last_name": "Smith"}]}"#,
        )
        .unwrap();
        assert_eq!(payload.employees.len(), 1);
        assert_eq!(payload.employees[0].first_name, "Al");
    }

    #[tokio::test]
    async fn test_unreachable_service_yields_no_result() {
        // Port 9 (discard) is not serving HTTP
        let client = EmployeeClient::new("http://127.0.0.1:9").unwrap();
        assert!(client.get_employee(1).await.is_none());
        assert!(client.get_all_employees().await.is_none());
        assert!(client.post_employee("a", "b", 1).await.is_none());
    }
}
