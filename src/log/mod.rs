// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request log records and where they go
//!
//! A caller creates an `HttpRequestLog`, attaches it to a `CallContext`,
//! and hands the finished record to a `RequestLogSink`.

mod context;
mod record;
mod sink;

pub use context::CallContext;
pub use record::{HttpRequestLog, LoggedHeaders, RequestLogHandle};
pub use sink::{MemorySink, RequestLogSink, TracingSink};
