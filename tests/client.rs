// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use bytes::Bytes;
use restlog::{
    CallContext, Error, HttpClient, HttpClientConfig, HttpRequestLog, MemorySink, Request,
    RequestLogHandle, RestLogConfig,
};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn logged_get_records_request_and_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(header("x-trace", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap();
    let handle = RequestLogHandle::new(HttpRequestLog::new());
    let ctx = CallContext::new().with_request_log(handle.clone());

    let request = Request::get(format!("{}/orders", server.uri()))
        .unwrap()
        .header("x-trace", "abc");
    let response = client.execute(&ctx, request, Bytes::new()).await.unwrap();

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text_lossy(), "[]");

    let record = handle.snapshot();
    assert_eq!(record.method.as_deref(), Some("GET"));
    assert_eq!(record.http_status, Some(200));
    assert_eq!(
        record.headers.unwrap().get("x-trace"),
        Some(&vec!["abc".to_string()])
    );
    assert!(record.request_time.unwrap() <= record.response_time.unwrap());
}

#[tokio::test]
async fn error_status_is_returned_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(body_string("{\"id\":1}"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let sink = MemorySink::new();
    let client = HttpClient::new().unwrap().with_sink(sink.clone());

    let request = Request::post(format!("{}/orders", server.uri())).unwrap();
    let (record, result) = client
        .execute_logged(request, Bytes::from("{\"id\":1}"))
        .await;

    let response = result.unwrap();
    assert_eq!(response.status_code(), 500);
    assert_eq!(response.text_lossy(), "boom");
    assert_eq!(record.http_status, Some(500));
    assert!(record.error.is_none());
    assert_eq!(sink.records().len(), 1);
}

#[tokio::test]
async fn connection_failure_keeps_only_request_fields() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpClient::new().unwrap();
    let request = Request::get(format!("http://{}/unreachable", addr)).unwrap();
    let (record, result) = client.execute_logged(request, Bytes::new()).await;

    assert!(matches!(result, Err(Error::Http(_))));
    assert_eq!(record.method.as_deref(), Some("GET"));
    assert!(record.request_time.is_some());
    assert!(record.http_status.is_none());
    assert!(record.response_time.is_none());
    assert!(record.error.is_some());
}

#[tokio::test]
async fn disabled_logging_leaves_record_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let config = HttpClientConfig {
        log_requests: false,
        ..Default::default()
    };
    let client = HttpClient::with_config(config).unwrap();
    let handle = RequestLogHandle::new(HttpRequestLog::new());
    let ctx = CallContext::new().with_request_log(handle.clone());

    let response = client.get(&ctx, server.uri()).await.unwrap();

    assert_eq!(response.status_code(), 204);
    assert_eq!(handle.snapshot(), HttpRequestLog::new());
}

#[tokio::test]
async fn configured_default_headers_are_logged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tenants"))
        .and(header("x-tenant", "acme"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = RestLogConfig::from_json_str(r#"{"default_headers":{"x-tenant":"acme"}}"#)
        .unwrap()
        .into_client_config()
        .unwrap();
    let client = HttpClient::with_config(config).unwrap();

    let request = Request::get(format!("{}/tenants", server.uri())).unwrap();
    let (record, result) = client.execute_logged(request, Bytes::new()).await;

    assert_eq!(result.unwrap().status_code(), 200);
    let headers = record.headers.unwrap();
    assert_eq!(headers.get("x-tenant"), Some(&vec!["acme".to_string()]));
    assert_eq!(headers.get("accept"), Some(&vec!["*/*".to_string()]));
}
