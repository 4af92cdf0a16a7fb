// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request interceptor trait and chain composition
//!
//! Interceptors wrap the call: each one receives the request plus a `Next`
//! that runs the rest of the chain and finally the transport.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;
use crate::http::{Request, Response};
use crate::log::CallContext;

/// Request interceptor trait
///
/// # Example
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use bytes::Bytes;
/// use restlog::network::{Next, RequestInterceptor};
/// use restlog::http::{Request, Response};
/// use restlog::log::CallContext;
///
/// struct Timing;
///
/// #[async_trait]
/// impl RequestInterceptor for Timing {
///     async fn intercept(
///         &self,
///         ctx: &CallContext,
///         request: Request,
///         body: Bytes,
///         next: Next<'_>,
///     ) -> restlog::Result<Response> {
///         let start = std::time::Instant::now();
///         let response = next.run(ctx, request, body).await?;
///         println!("took {:?}", start.elapsed());
///         Ok(response)
///     }
/// }
/// ```
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    /// Observe or alter one call, delegating to `next` to continue it
    async fn intercept(
        &self,
        ctx: &CallContext,
        request: Request,
        body: Bytes,
        next: Next<'_>,
    ) -> Result<Response>;

    /// Name used in diagnostics
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// The terminal stage of a chain that actually performs the call
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and read the full response
    async fn execute(&self, request: Request, body: Bytes) -> Result<Response>;
}

/// Remainder of an interceptor chain
#[derive(Clone, Copy)]
pub struct Next<'a> {
    interceptors: &'a [Arc<dyn RequestInterceptor>],
    transport: &'a dyn Transport,
}

impl<'a> Next<'a> {
    /// Build a `Next` over a slice of interceptors ending at `transport`
    pub fn new(
        interceptors: &'a [Arc<dyn RequestInterceptor>],
        transport: &'a dyn Transport,
    ) -> Self {
        Self {
            interceptors,
            transport,
        }
    }

    /// Run the next interceptor, or the transport when none remain
    pub async fn run(self, ctx: &CallContext, request: Request, body: Bytes) -> Result<Response> {
        match self.interceptors.split_first() {
            Some((current, rest)) => {
                let next = Next {
                    interceptors: rest,
                    transport: self.transport,
                };
                current.intercept(ctx, request, body, next).await
            }
            None => self.transport.execute(request, body).await,
        }
    }

    /// Interceptors still ahead of the transport
    pub fn remaining(&self) -> usize {
        self.interceptors.len()
    }
}

impl fmt::Debug for Next<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("remaining", &self.interceptors.len())
            .finish()
    }
}

/// Interceptor chain - ordered list, first added runs outermost
#[derive(Clone, Default)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl InterceptorChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
        }
    }

    /// Append an interceptor
    pub fn add<I: RequestInterceptor + 'static>(&mut self, interceptor: I) {
        self.interceptors.push(Arc::new(interceptor));
    }

    /// Builder-style `add`
    pub fn with<I: RequestInterceptor + 'static>(mut self, interceptor: I) -> Self {
        self.add(interceptor);
        self
    }

    /// Number of interceptors
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Whether the chain has no interceptors
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Interceptor names in execution order
    pub fn names(&self) -> Vec<&'static str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }

    /// Run a call through every interceptor and then `transport`
    pub async fn execute(
        &self,
        ctx: &CallContext,
        transport: &dyn Transport,
        request: Request,
        body: Bytes,
    ) -> Result<Response> {
        Next::new(&self.interceptors, transport)
            .run(ctx, request, body)
            .await
    }
}

impl fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("interceptors", &self.names())
            .finish()
    }
}
