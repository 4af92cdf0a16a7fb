// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Explicit per-call context passed through the interceptor chain

use super::record::RequestLogHandle;

/// State scoped to one logical outbound call
///
/// A fresh context is created per call. Interceptors read the optional
/// request log from here instead of from ambient storage.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    request_log: Option<RequestLogHandle>,
}

impl CallContext {
    /// Context without a request log
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a request log handle
    pub fn with_request_log(mut self, handle: RequestLogHandle) -> Self {
        self.request_log = Some(handle);
        self
    }

    /// The request log for this call, if the caller attached one
    pub fn request_log(&self) -> Option<&RequestLogHandle> {
        self.request_log.as_ref()
    }
}
