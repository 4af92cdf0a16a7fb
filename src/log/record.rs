// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Per-call request log record

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Header name to ordered values, as written into a log record
pub type LoggedHeaders = HashMap<String, Vec<String>>;

/// Metadata captured for one outbound HTTP call
///
/// The interceptor fills `method`, `headers`, `request_time`, `http_status`
/// and `response_time`. `url` and `error` belong to whoever owns the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpRequestLog {
    /// Target URL
    pub url: Option<String>,
    /// HTTP verb
    pub method: Option<String>,
    /// Filtered request headers
    pub headers: Option<LoggedHeaders>,
    /// Set immediately before the request is delegated
    pub request_time: Option<DateTime<Utc>>,
    /// Numeric response status
    pub http_status: Option<u16>,
    /// Set immediately after the response arrives
    pub response_time: Option<DateTime<Utc>>,
    /// Transport failure message
    pub error: Option<String>,
}

impl HttpRequestLog {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record for a target URL
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Time between request and response, if both were recorded
    pub fn elapsed(&self) -> Option<chrono::Duration> {
        match (self.request_time, self.response_time) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Whether the response half of the record was written
    pub fn is_complete(&self) -> bool {
        self.http_status.is_some() && self.response_time.is_some()
    }
}

/// Shared handle to one `HttpRequestLog`
///
/// Clones point at the same record.
#[derive(Debug, Clone, Default)]
pub struct RequestLogHandle {
    inner: Arc<Mutex<HttpRequestLog>>,
}

impl RequestLogHandle {
    /// Wrap a record in a new handle
    pub fn new(record: HttpRequestLog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(record)),
        }
    }

    /// Mutate the record under a single lock acquisition
    pub fn update<R>(&self, f: impl FnOnce(&mut HttpRequestLog) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Copy of the current record state
    pub fn snapshot(&self) -> HttpRequestLog {
        self.inner.lock().clone()
    }
}
