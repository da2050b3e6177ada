//! End-to-end search run tests.
//!
//! Drives `SplunkClient::run` against a mock backend:
//! - The full login, submit, poll, fetch sequence
//! - Short-circuiting on the first failing stage
//! - Two concurrent runs on one shared client
//!
//! # Invariants
//! - A failed stage prevents every later stage from being called

mod common;

use std::sync::Arc;

use common::*;
use splunk_mcp_client::{ErrorKind, SearchRequest};
use wiremock::matchers::{body_string_contains, header, method, path};

async fn mount_create(server: &MockServer, body: ResponseTemplate, expected: u64) {
    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(body)
        .expect(expected)
        .mount(server)
        .await;
}

async fn mount_status(server: &MockServer, sid: &str, expected: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/services/search/jobs/{}", sid)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/job_status_done.json")),
        )
        .expect(expected)
        .mount(server)
        .await;
}

async fn mount_results(server: &MockServer, sid: &str, body: serde_json::Value, expected: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/services/search/jobs/{}/results", sid)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_run_full_sequence() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .and(header("Authorization", splunk_auth().as_str()))
        .and(body_string_contains("search=search+index%3D_internal"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("search/create_job.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_status(&mock_server, "1700000000.42", 1).await;
    mount_results(
        &mock_server,
        "1700000000.42",
        load_fixture("search/results.json"),
        1,
    )
    .await;

    let client = test_client(&mock_server);
    let result = client
        .run(&SearchRequest::new("index=_internal").unwrap())
        .await
        .unwrap();

    assert_eq!(result.job_id, "1700000000.42");
    assert_eq!(result.row_count, 3);
    assert_eq!(result.rows.len(), result.row_count);
}

#[tokio::test]
async fn test_run_with_xml_submission() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    mount_create(
        &mock_server,
        ResponseTemplate::new(201).set_body_string(load_fixture_text("search/create_job.xml")),
        1,
    )
    .await;
    mount_status(&mock_server, "1700000000.42", 1).await;
    mount_results(
        &mock_server,
        "1700000000.42",
        load_fixture("search/results_empty.json"),
        1,
    )
    .await;

    let client = test_client(&mock_server);
    let result = client
        .run(&SearchRequest::new("index=nothing_here").unwrap())
        .await
        .unwrap();

    assert_eq!(result.row_count, 0);
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_run_login_failure_stops_everything() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(load_fixture("auth/login_failure.json")),
        )
        .mount(&mock_server)
        .await;
    mount_create(&mock_server, ResponseTemplate::new(201), 0).await;

    let client = test_client(&mock_server);
    let err = client
        .run(&SearchRequest::new("index=main").unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authentication);
}

#[tokio::test]
async fn test_run_malformed_submission_never_polls() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    mount_create(
        &mock_server,
        ResponseTemplate::new(201)
            .set_body_string(load_fixture_text("search/create_job_malformed.txt")),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .run(&SearchRequest::new("index=main").unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Submission);
}

#[tokio::test]
async fn test_run_result_failure_keeps_kind() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    mount_create(
        &mock_server,
        ResponseTemplate::new(201).set_body_json(load_fixture("search/create_job.json")),
        1,
    )
    .await;
    mount_status(&mock_server, "1700000000.42", 1).await;
    mount_results(
        &mock_server,
        "1700000000.42",
        serde_json::json!({"results": 5}),
        1,
    )
    .await;

    let client = test_client(&mock_server);
    let err = client
        .run(&SearchRequest::new("index=main").unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResultParse);
}

#[tokio::test]
async fn test_concurrent_runs_are_independent() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .and(body_string_contains("search=search+index%3Dalpha"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"sid": "sid-alpha"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .and(body_string_contains("search=search+index%3Dbeta"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_string("<?xml version=\"1.0\"?><response><sid>sid-beta</sid></response>"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_status(&mock_server, "sid-alpha", 1).await;
    mount_status(&mock_server, "sid-beta", 1).await;
    mount_results(
        &mock_server,
        "sid-alpha",
        serde_json::json!({"results": [{"idx": "alpha"}]}),
        1,
    )
    .await;
    mount_results(
        &mock_server,
        "sid-beta",
        serde_json::json!({"results": [{"idx": "beta"}, {"idx": "beta"}]}),
        1,
    )
    .await;

    let client = Arc::new(test_client(&mock_server));
    let alpha = SearchRequest::new("index=alpha").unwrap();
    let beta = SearchRequest::new("index=beta").unwrap();

    let results = futures::future::join_all([client.run(&alpha), client.run(&beta)]).await;

    let alpha = results[0].as_ref().unwrap();
    let beta = results[1].as_ref().unwrap();
    assert_eq!(alpha.job_id, "sid-alpha");
    assert_eq!(alpha.row_count, 1);
    assert_eq!(alpha.rows[0]["idx"], "alpha");
    assert_eq!(beta.job_id, "sid-beta");
    assert_eq!(beta.row_count, 2);
    assert_eq!(beta.rows[0]["idx"], "beta");
}

#[tokio::test]
async fn test_concurrent_runs_on_spawned_tasks() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    mount_create(
        &mock_server,
        ResponseTemplate::new(201).set_body_json(load_fixture("search/create_job.json")),
        4,
    )
    .await;
    mount_status(&mock_server, "1700000000.42", 4).await;
    mount_results(
        &mock_server,
        "1700000000.42",
        load_fixture("search/results.json"),
        4,
    )
    .await;

    let client = Arc::new(test_client(&mock_server));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                let request = SearchRequest::new(format!("index=main | head {}", i + 1)).unwrap();
                client.run(&request).await
            })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.row_count, 3);
    }
    assert!(client.session_manager().has_session());
}
