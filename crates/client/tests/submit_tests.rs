//! Job submission tests.
//!
//! Covers `POST /services/search/jobs`:
//! - Form fields and the `Splunk` authorization scheme
//! - Sid extraction from JSON and XML bodies
//! - Rejections and unrecognizable bodies
//!
//! # Invariants
//! - Every submission failure surfaces as `ErrorKind::Submission`
//!
//! # What this does NOT handle
//! - Status polling (see poll_tests.rs)

mod common;

use common::*;
use splunk_mcp_client::{CreateJobOptions, ErrorKind, SearchRequest};
use wiremock::matchers::{body_string_contains, header, method, path};

fn options(request: &SearchRequest) -> CreateJobOptions {
    CreateJobOptions::from(request)
}

#[tokio::test]
async fn test_create_job_json_sid_and_form_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .and(header("Authorization", "Splunk test-token"))
        .and(body_string_contains("search=search+error"))
        .and(body_string_contains("earliest_time=-1h"))
        .and(body_string_contains("latest_time=now"))
        .and(body_string_contains("max_count=5"))
        .and(body_string_contains("output_mode=json"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("search/create_job.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let request =
        SearchRequest::with_options("error", Some("-1h".to_string()), None, Some(5)).unwrap();
    let sid = endpoints::create_job(
        &Client::new(),
        &mock_server.uri(),
        "test-token",
        request.query(),
        &options(&request),
    )
    .await
    .unwrap();

    assert_eq!(sid, "1700000000.42");
}

#[tokio::test]
async fn test_create_job_xml_sid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("content-type", "text/xml; charset=UTF-8")
                .set_body_string(load_fixture_text("search/create_job.xml")),
        )
        .mount(&mock_server)
        .await;

    let request = SearchRequest::new("index=_internal").unwrap();
    let sid = endpoints::create_job(
        &Client::new(),
        &mock_server.uri(),
        "test-token",
        request.query(),
        &options(&request),
    )
    .await
    .unwrap();

    assert_eq!(sid, "1700000000.42");
}

#[tokio::test]
async fn test_create_job_xml_ignores_content_type() {
    let mock_server = MockServer::start().await;

    // XML body labelled as JSON still decodes by sniffing.
    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("content-type", "application/json")
                .set_body_string("<response><sid>abc123</sid></response>"),
        )
        .mount(&mock_server)
        .await;

    let request = SearchRequest::new("index=main").unwrap();
    let sid = endpoints::create_job(
        &Client::new(),
        &mock_server.uri(),
        "t",
        request.query(),
        &options(&request),
    )
    .await
    .unwrap();

    assert_eq!(sid, "abc123");
}

#[tokio::test]
async fn test_create_job_rejected_by_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(load_fixture_text("search/create_job_error.xml")),
        )
        .mount(&mock_server)
        .await;

    let request = SearchRequest::new("index=main | stats count(").unwrap();
    let err = endpoints::create_job(
        &Client::new(),
        &mock_server.uri(),
        "t",
        request.query(),
        &options(&request),
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Submission);
    assert!(err.to_string().contains("400"));
}

#[tokio::test]
async fn test_create_job_xml_messages_without_sid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture_text("search/create_job_error.xml")),
        )
        .mount(&mock_server)
        .await;

    let request = SearchRequest::new("index=main").unwrap();
    let err = endpoints::create_job(
        &Client::new(),
        &mock_server.uri(),
        "t",
        request.query(),
        &options(&request),
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Submission);
    assert!(err.to_string().contains("unbalanced parentheses"));
}

#[tokio::test]
async fn test_create_job_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_string(load_fixture_text("search/create_job_malformed.txt")),
        )
        .mount(&mock_server)
        .await;

    let request = SearchRequest::new("index=main").unwrap();
    let err = endpoints::create_job(
        &Client::new(),
        &mock_server.uri(),
        "t",
        request.query(),
        &options(&request),
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Submission);
}

#[tokio::test]
async fn test_create_job_unreachable_backend() {
    let request = SearchRequest::new("index=main").unwrap();
    let err = endpoints::create_job(
        &Client::new(),
        "http://127.0.0.1:1",
        "t",
        request.query(),
        &options(&request),
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Submission);
}

#[tokio::test]
async fn test_client_submit_uses_request_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .and(body_string_contains("earliest_time=-24h"))
        .and(body_string_contains("latest_time=now"))
        .and(body_string_contains("max_count=100"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"sid": "d1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let request = SearchRequest::new("sourcetype=access_combined").unwrap();
    let sid = client.submit("tok", &request).await.unwrap();

    assert_eq!(sid, "d1");
}
