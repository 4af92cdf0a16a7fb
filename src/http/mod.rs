// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client layer
//!
//! Provides the request/response types and a client whose calls run
//! through an `InterceptorChain` before reaching reqwest.

mod client;
mod request;
mod response;

pub use client::{HttpClient, HttpClientConfig, ReqwestTransport};
pub use request::Request;
pub use response::Response;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("restlog/", env!("CARGO_PKG_VERSION"));

/// Common HTTP headers
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const CONTENT_TYPE: &str = "content-type";
}
