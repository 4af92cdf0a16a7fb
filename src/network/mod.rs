// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request interception
//!
//! Interceptors wrap outbound calls in an explicit, ordered chain.

mod headers;
mod interceptor_trait;
mod logging;

pub use headers::{filter_headers, group_header_map, HeaderMultiMap};
pub use interceptor_trait::{InterceptorChain, Next, RequestInterceptor, Transport};
pub use logging::RequestLoggingInterceptor;
