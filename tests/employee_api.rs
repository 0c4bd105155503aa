//! Employee API Tests
//!
//! End-to-end coverage over a live server: the companion client drives the
//! HTTP surface, which drives the file-backed repository.

use std::sync::Arc;

use rosterdb::client::EmployeeClient;
use rosterdb::http_server::{HttpServer, ServerConfig};
use rosterdb::repository::FileRepository;
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

/// Serve a fresh file-backed store on an ephemeral port; returns the
/// client pointed at it and the temp dir keeping the store alive.
async fn start_service() -> (EmployeeClient, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repository = Arc::new(FileRepository::open(temp_dir.path()).unwrap());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(repository, ServerConfig::default());
    tokio::spawn(async move {
        axum::serve(listener, server.router()).await.unwrap();
    });

    let client = EmployeeClient::new(format!("http://{}", addr)).unwrap();
    (client, temp_dir)
}

// =============================================================================
// Create / Fetch Round-Trip
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_create_then_fetch_returns_normalized_record() {
    let (client, _store) = start_service().await;

    let created = client.post_employee("al", "smith", 1).await.unwrap();
    assert_eq!(created.id_number, 1);
    assert_eq!(created.first_name, "Al");
    assert_eq!(created.last_name, "Smith");

    let fetched = client.get_employee(1).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_create_strips_non_letters() {
    let (client, _store) = start_service().await;

    let created = client.post_employee("jo3hn!!", "d0e", 42).await.unwrap();
    assert_eq!(created.first_name, "John");
    assert_eq!(created.last_name, "De");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_list_reflects_creates_in_order() {
    let (client, _store) = start_service().await;

    for (first, id) in [("b", 5), ("a", 2), ("c", 9)] {
        client.post_employee(first, "x", id).await.unwrap();
    }

    let employees = client.get_all_employees().await.unwrap();
    let ids: Vec<i64> = employees.iter().map(|e| e.id_number).collect();
    assert_eq!(ids, vec![5, 2, 9]);
}

// =============================================================================
// Not-Found and Caller-Input Errors
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_fetch_absent_identity_is_explicit_not_found() {
    let (client, _store) = start_service().await;

    client.post_employee("al", "smith", 1).await.unwrap();

    // The client sees "no result"
    assert!(client.get_employee(99).await.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_absent_identity_status_is_404() {
    let (client, _store) = start_service().await;
    let base = client_base_url(&client);

    let response = reqwest::get(format!("{}/employees/99", base)).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], 404);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_non_integer_identity_status_is_400() {
    let (client, _store) = start_service().await;
    let base = client_base_url(&client);

    let response = reqwest::get(format!("{}/employees/abc", base)).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_missing_creation_field_status_is_400() {
    let (client, _store) = start_service().await;
    let base = client_base_url(&client);

    let response = reqwest::Client::new()
        .post(format!("{}/employees", base))
        .json(&serde_json::json!({"first_name": "al", "id_number": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    // Nothing was persisted
    assert!(client.get_all_employees().await.unwrap().is_empty());
}

// =============================================================================
// Duplicate Identities
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_duplicate_create_is_conflict() {
    let (client, _store) = start_service().await;
    let base = client_base_url(&client);

    client.post_employee("al", "smith", 1).await.unwrap();

    // The client sees "no result"
    assert!(client.post_employee("bo", "jones", 1).await.is_none());

    // The wire status is 409 and the original record is untouched
    let response = reqwest::Client::new()
        .post(format!("{}/employees", base))
        .json(&serde_json::json!({"first_name": "bo", "last_name": "jones", "id_number": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CONFLICT);

    let kept = client.get_employee(1).await.unwrap();
    assert_eq!(kept.first_name, "Al");
}

// =============================================================================
// Liveness
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_root_path_confirmation() {
    let (client, _store) = start_service().await;
    let base = client_base_url(&client);

    let response = reqwest::get(base).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let text = response.text().await.unwrap();
    assert!(text.contains("main url index"));
}

// =============================================================================
// Helpers
// =============================================================================

fn client_base_url(client: &EmployeeClient) -> String {
    client.base_url().to_string()
}
