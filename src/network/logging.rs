// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Interceptor that writes call metadata into the context's request log

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;

use super::headers::{filter_headers, group_header_map};
use super::interceptor_trait::{Next, RequestInterceptor};
use crate::error::Result;
use crate::http::{Request, Response};
use crate::log::CallContext;

/// Records method, headers and timing of a call into its `HttpRequestLog`
///
/// Calls without a request log in their context pass straight through.
/// Transport errors are returned untouched and leave the response fields
/// of the record unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestLoggingInterceptor;

impl RequestLoggingInterceptor {
    /// Create a new request logging interceptor
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RequestInterceptor for RequestLoggingInterceptor {
    async fn intercept(
        &self,
        ctx: &CallContext,
        request: Request,
        body: Bytes,
        next: Next<'_>,
    ) -> Result<Response> {
        let request_log = ctx.request_log();

        if let Some(log) = request_log {
            let headers = filter_headers(Some(&group_header_map(&request.headers)));
            log.update(|rec| {
                rec.method = Some(request.method.to_string());
                rec.headers = headers;
                rec.request_time = Some(Utc::now());
            });
            tracing::debug!(method = %request.method, url = %request.url, "Recorded request");
        }

        let response = next.run(ctx, request, body).await?;

        if let Some(log) = request_log {
            log.update(|rec| {
                rec.http_status = Some(response.status.as_u16());
                rec.response_time = Some(Utc::now());
            });
            tracing::debug!(status = response.status.as_u16(), "Recorded response");
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::http::Response;
    use crate::log::{HttpRequestLog, RequestLogHandle};
    use crate::network::{InterceptorChain, Transport};
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;
    use std::io;

    struct FixedTransport {
        response: Response,
    }

    #[async_trait]
    impl Transport for FixedTransport {
        async fn execute(&self, _request: Request, _body: Bytes) -> Result<Response> {
            Ok(self.response.clone())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn execute(&self, _request: Request, _body: Bytes) -> Result<Response> {
            Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused").into())
        }
    }

    fn ok_response() -> Response {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "text/plain".parse().unwrap());
        Response::new(
            StatusCode::OK,
            headers,
            Bytes::from("hello"),
            url::Url::parse("https://example.com/items").unwrap(),
            false,
            12,
        )
    }

    fn request() -> Request {
        Request::post("https://example.com/items")
            .unwrap()
            .header("content-type", "application/json")
            .header("x-trace", "a")
            .header("x-trace", "b")
    }

    fn chain() -> InterceptorChain {
        InterceptorChain::new().with(RequestLoggingInterceptor::new())
    }

    #[tokio::test]
    async fn test_no_record_is_noop() {
        let transport = FixedTransport {
            response: ok_response(),
        };

        let response = chain()
            .execute(&CallContext::new(), &transport, request(), Bytes::from("{}"))
            .await
            .unwrap();

        assert_eq!(response, ok_response());
    }

    #[tokio::test]
    async fn test_success_populates_record() {
        let transport = FixedTransport {
            response: ok_response(),
        };
        let handle = RequestLogHandle::new(HttpRequestLog::new());
        let ctx = CallContext::new().with_request_log(handle.clone());

        let response = chain()
            .execute(&ctx, &transport, request(), Bytes::from("{}"))
            .await
            .unwrap();

        assert_eq!(response, ok_response());

        let rec = handle.snapshot();
        assert_eq!(rec.method.as_deref(), Some("POST"));
        assert_eq!(rec.http_status, Some(200));
        assert!(rec.is_complete());

        let headers = rec.headers.unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers["content-type"], vec!["application/json".to_string()]);
        assert_eq!(headers["x-trace"], vec!["a".to_string(), "b".to_string()]);

        assert!(rec.request_time.unwrap() <= rec.response_time.unwrap());
    }

    #[tokio::test]
    async fn test_failure_leaves_response_fields_unset() {
        let handle = RequestLogHandle::new(HttpRequestLog::new());
        let ctx = CallContext::new().with_request_log(handle.clone());

        let err = chain()
            .execute(&ctx, &FailingTransport, request(), Bytes::new())
            .await
            .unwrap_err();

        match err {
            Error::Io(e) => {
                assert_eq!(e.kind(), io::ErrorKind::ConnectionRefused);
                assert_eq!(e.to_string(), "connection refused");
            }
            other => panic!("Expected Io error, got {other:?}"),
        }

        let rec = handle.snapshot();
        assert_eq!(rec.method.as_deref(), Some("POST"));
        assert!(rec.request_time.is_some());
        assert!(rec.http_status.is_none());
        assert!(rec.response_time.is_none());
        assert!(rec.error.is_none());
    }

    #[test]
    fn test_direct_intercept_with_empty_next() {
        let transport = FixedTransport {
            response: ok_response(),
        };
        let handle = RequestLogHandle::new(HttpRequestLog::new());
        let ctx = CallContext::new().with_request_log(handle.clone());
        let next = Next::new(&[], &transport);
        assert_eq!(next.remaining(), 0);

        let response = tokio_test::block_on(RequestLoggingInterceptor.intercept(
            &ctx,
            request(),
            Bytes::new(),
            next,
        ))
        .unwrap();

        assert_eq!(response.status_code(), 200);
        assert_eq!(handle.snapshot().method.as_deref(), Some("POST"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_recorded() {
        let mut response = ok_response();
        response.status = StatusCode::SERVICE_UNAVAILABLE;
        let transport = FixedTransport {
            response: response.clone(),
        };
        let handle = RequestLogHandle::new(HttpRequestLog::new());
        let ctx = CallContext::new().with_request_log(handle.clone());

        let request = Request::get("https://example.com").unwrap();
        let returned = chain()
            .execute(&ctx, &transport, request, Bytes::new())
            .await
            .unwrap();

        assert_eq!(returned, response);
        assert_eq!(handle.snapshot().http_status, Some(503));
        assert_eq!(handle.snapshot().headers, Some(Default::default()));
    }
}
