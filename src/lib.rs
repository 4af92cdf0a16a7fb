// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # restlog - HTTP client with per-call request logging
//!
//! Outbound calls run through an explicit interceptor chain. The
//! `RequestLoggingInterceptor` writes method, headers, timestamps and
//! status into the `HttpRequestLog` carried by the call's `CallContext`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bytes::Bytes;
//! use restlog::{CallContext, HttpClient, HttpRequestLog, Request, RequestLogHandle};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new()?;
//!
//!     let log = RequestLogHandle::new(HttpRequestLog::for_url("https://example.com"));
//!     let ctx = CallContext::new().with_request_log(log.clone());
//!
//!     let request = Request::get("https://example.com")?;
//!     let response = client.execute(&ctx, request, Bytes::new()).await?;
//!
//!     println!("{} -> {:?}", response.status, log.snapshot().elapsed());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod log;
pub mod network;

// Re-exports for convenience

// Configuration
pub use config::RestLogConfig;

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{HttpClient, HttpClientConfig, Request, ReqwestTransport, Response};

// Request logs
pub use log::{
    CallContext, HttpRequestLog, LoggedHeaders, MemorySink, RequestLogHandle, RequestLogSink,
    TracingSink,
};

// Interception
pub use network::{
    filter_headers, group_header_map, HeaderMultiMap, InterceptorChain, Next,
    RequestInterceptor, RequestLoggingInterceptor, Transport,
};

/// restlog version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
