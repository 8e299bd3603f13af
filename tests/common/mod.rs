//! Shared fixtures for the mock-backend integration tests.

#![allow(dead_code)]

use backoffice_sdk::prelude::*;
use std::time::Duration;
use wiremock::MockServer;

pub const API_KEY: &str = "anon-test-key";
pub const ADMIN_TOKEN: &str = "admin-jwt";
pub const ADMIN_ID: &str = "admin-1";

pub fn admin_session() -> SessionState {
    SessionState {
        token: ADMIN_TOKEN.to_string(),
        email: "ops@example.com".to_string(),
        role: AdminRole::Admin,
        admin_id: ADMIN_ID.to_string(),
        logged_in: true,
    }
}

/// Client pointed at the mock server, already logged in.
pub fn logged_in_client(server: &MockServer) -> BackofficeClient {
    BackofficeClient::builder()
        .base_url(&server.uri())
        .api_key(API_KEY)
        .session(admin_session())
        .build()
        .expect("client should build")
}

/// Client pointed at the mock server with no session.
pub fn anonymous_client(server: &MockServer) -> BackofficeClient {
    BackofficeClient::builder()
        .base_url(&server.uri())
        .api_key(API_KEY)
        .build()
        .expect("client should build")
}

pub fn logged_in_client_with_ttl(server: &MockServer, ttl: Duration) -> BackofficeClient {
    BackofficeClient::builder()
        .base_url(&server.uri())
        .api_key(API_KEY)
        .session(admin_session())
        .balance_cache_ttl(ttl)
        .build()
        .expect("client should build")
}

/// Requests the server received for `table`, in arrival order.
pub async fn requests_to(server: &MockServer, table: &str) -> Vec<wiremock::Request> {
    let path = format!("/rest/v1/{}", table);
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == path)
        .collect()
}
