//! Admin login and logout against a mock backend.

mod common;

use backoffice_sdk::prelude::*;
use common::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_with_active_admin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/admin_users"))
        .and(query_param("email", "eq.ops@example.com"))
        .and(query_param("is_active", "eq.true"))
        .and(header("authorization", "Bearer anon-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "admin-7", "email": "ops@example.com", "role": "admin", "is_active": true}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = anonymous_client(&server);
    let admin = client.auth().login("ops@example.com").await.unwrap();

    assert_eq!(admin.id, "admin-7");
    assert_eq!(admin.role, AdminRole::Admin);

    let session = client.auth().session().await.unwrap();
    assert!(session.logged_in);
    assert_eq!(session.admin_id, "admin-7");
    assert_eq!(session.email, "ops@example.com");
    assert_eq!(session.token, API_KEY);
    assert!(client.auth().is_authenticated().await);
}

#[tokio::test]
async fn login_falls_back_to_unfiltered_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/admin_users"))
        .and(query_param("is_active", "eq.true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/admin_users"))
        .and(query_param("email", "eq.legacy@example.com"))
        .and(query_param_is_missing("is_active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "admin-2", "email": "legacy@example.com", "role": "superadmin", "is_active": null}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = anonymous_client(&server);
    let admin = client.auth().login("legacy@example.com").await.unwrap();
    assert_eq!(admin.role, AdminRole::Superadmin);
    assert!(client.auth().is_authenticated().await);
}

#[tokio::test]
async fn inactive_admin_is_refused() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/admin_users"))
        .and(query_param("is_active", "eq.true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/admin_users"))
        .and(query_param_is_missing("is_active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "admin-3", "email": "gone@example.com", "role": "admin", "is_active": false}
        ])))
        .mount(&server)
        .await;

    let client = anonymous_client(&server);
    let err = client.auth().login("gone@example.com").await.unwrap_err();
    assert!(matches!(err, SdkError::Auth(AuthError::AccountInactive)));
    assert!(!client.auth().is_authenticated().await);
}

#[tokio::test]
async fn unknown_admin_is_refused() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/admin_users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let client = anonymous_client(&server);
    let err = client.auth().login("nobody@example.com").await.unwrap_err();
    match err {
        SdkError::Auth(AuthError::LoginFailed(message)) => {
            assert_eq!(message, "Invalid credentials or account not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(client.auth().session().await.is_none());
}

#[tokio::test]
async fn logout_clears_session() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server);
    assert!(client.auth().is_authenticated().await);

    client.auth().logout().await;
    assert!(!client.auth().is_authenticated().await);
    assert!(client.session().token().await.is_none());

    let err = client.support().tickets(None).await.unwrap_err();
    assert!(matches!(err, SdkError::Auth(AuthError::NotAuthenticated)));
}
