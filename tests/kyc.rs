//! KYC decisions against a mock backend.

mod common;

use backoffice_sdk::prelude::*;
use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_prior_status(server: &MockServer, status: &str) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("select", "kyc_status"))
        .and(query_param("user_id", "eq.u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "kyc_status": status }])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn approve_updates_profile_then_submission() {
    let server = MockServer::start().await;
    mount_prior_status(&server, "pending").await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/profiles"))
        .and(body_json(json!({"kyc_status": "approved"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/kyc_submissions"))
        .and(query_param("user_id", "eq.u1"))
        .and(body_partial_json(json!({"status": "approved", "reviewed_by": ADMIN_ID})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    client.kyc().approve("u1").await.unwrap();

    let sent = requests_to(&server, "kyc_submissions").await;
    let review: serde_json::Value = sent[0].body_json().unwrap();
    assert!(review.get("rejection_reason").is_none());
    assert!(review["reviewed_at"].is_string());
}

#[tokio::test]
async fn reject_records_reason() {
    let server = MockServer::start().await;
    mount_prior_status(&server, "pending").await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/kyc_submissions"))
        .and(body_partial_json(json!({
            "status": "rejected",
            "rejection_reason": "document expired"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    client.kyc().reject("u1", "document expired").await.unwrap();
}

#[tokio::test]
async fn failed_submission_write_restores_profile() {
    let server = MockServer::start().await;
    mount_prior_status(&server, "pending").await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/profiles"))
        .and(body_json(json!({"kyc_status": "approved"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/kyc_submissions"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "submission locked"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/profiles"))
        .and(body_json(json!({"kyc_status": "pending"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let err = client.kyc().approve("u1").await.unwrap_err();

    match err {
        SdkError::PartialWrite {
            step,
            compensated,
            source,
        } => {
            assert_eq!(step, "kyc_submission");
            assert!(compensated);
            assert_eq!(source.to_string(), "HTTP error: submission locked");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn failed_restore_is_reported() {
    let server = MockServer::start().await;
    mount_prior_status(&server, "pending").await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(204))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/kyc_submissions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let err = client.kyc().reject("u1", "blurry").await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::PartialWrite {
            compensated: false,
            ..
        }
    ));
}

#[tokio::test]
async fn failed_profile_write_touches_nothing_else() {
    let server = MockServer::start().await;
    mount_prior_status(&server, "pending").await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "nope"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let err = client.kyc().approve("u1").await.unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::Backend { status: 500, .. })));
    assert!(requests_to(&server, "kyc_submissions").await.is_empty());
}

#[tokio::test]
async fn list_is_newest_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/kyc_submissions"))
        .and(query_param("select", "*"))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"user_id": "u1", "status": "pending"}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let submissions = client.kyc().list().await.unwrap();
    assert_eq!(submissions[0]["status"], "pending");
}
