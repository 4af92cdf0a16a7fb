// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::Client;

use super::request::Request;
use super::response::Response;
use super::{headers, DEFAULT_USER_AGENT};
use crate::error::{Error, Result};
use crate::log::{CallContext, HttpRequestLog, RequestLogHandle, RequestLogSink, TracingSink};
use crate::network::{InterceptorChain, RequestInterceptor, RequestLoggingInterceptor, Transport};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Default timeout
    pub timeout: Duration,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Accept invalid certificates (dangerous!)
    pub accept_invalid_certs: bool,
    /// Default headers
    pub default_headers: HeaderMap,
    /// Proxy URL
    pub proxy: Option<String>,
    /// Install the request logging interceptor
    pub log_requests: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(headers::ACCEPT, HeaderValue::from_static("*/*"));

        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
            accept_invalid_certs: false,
            default_headers,
            proxy: None,
            log_requests: true,
        }
    }
}

/// Transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build the underlying reqwest client from `config`
    pub fn new(config: &HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .danger_accept_invalid_certs(config.accept_invalid_certs);

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request, body: Bytes) -> Result<Response> {
        let start = Instant::now();

        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());

        if !body.is_empty() {
            builder = builder.body(body);
        }

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;

        let redirected = response.url() != &request.url;
        let final_url = response.url().clone();
        let status = response.status();
        let headers = response.headers().clone();

        let body = response.bytes().await?;
        let response_time = start.elapsed().as_millis() as u64;

        Ok(Response::new(
            status,
            headers,
            body,
            final_url,
            redirected,
            response_time,
        ))
    }
}

/// HTTP client whose calls pass through an interceptor chain
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    chain: InterceptorChain,
    config: HttpClientConfig,
    sink: Arc<dyn RequestLogSink>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client backed by reqwest
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client over any transport
    ///
    /// With `log_requests` set, the logging interceptor is the outermost
    /// entry of the chain.
    pub fn with_transport<T: Transport + 'static>(config: HttpClientConfig, transport: T) -> Self {
        let mut chain = InterceptorChain::new();
        if config.log_requests {
            chain.add(RequestLoggingInterceptor::new());
        }

        Self {
            transport: Arc::new(transport),
            chain,
            config,
            sink: Arc::new(TracingSink),
        }
    }

    /// Append an interceptor after the ones already installed
    pub fn with_interceptor<I: RequestInterceptor + 'static>(mut self, interceptor: I) -> Self {
        self.chain.add(interceptor);
        self
    }

    /// Replace the sink used by `execute_logged`
    pub fn with_sink<S: RequestLogSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Execute a request through the chain
    ///
    /// Configured default headers are added before the first interceptor
    /// runs, unless the request already carries a header of that name.
    pub async fn execute(
        &self,
        ctx: &CallContext,
        mut request: Request,
        body: Bytes,
    ) -> Result<Response> {
        self.apply_default_headers(&mut request);
        self.chain
            .execute(ctx, self.transport.as_ref(), request, body)
            .await
    }

    /// Execute a GET request
    pub async fn get(&self, ctx: &CallContext, url: impl AsRef<str>) -> Result<Response> {
        self.execute(ctx, Request::get(url)?, Bytes::new()).await
    }

    /// Execute a POST request
    pub async fn post(
        &self,
        ctx: &CallContext,
        url: impl AsRef<str>,
        body: impl Into<Bytes>,
    ) -> Result<Response> {
        self.execute(ctx, Request::post(url)?, body.into()).await
    }

    /// Execute with a fresh request log, emit it to the sink and return it
    ///
    /// The record is returned even when the call fails; its `error` field
    /// then holds the failure message.
    pub async fn execute_logged(
        &self,
        request: Request,
        body: Bytes,
    ) -> (HttpRequestLog, Result<Response>) {
        let handle = RequestLogHandle::new(HttpRequestLog::for_url(request.url_str()));
        let ctx = CallContext::new().with_request_log(handle.clone());

        let result = self.execute(&ctx, request, body).await;

        if let Err(ref e) = result {
            tracing::warn!(
                error = %e,
                transport = e.is_transport(),
                timeout = e.is_timeout(),
                "Request failed"
            );
            handle.update(|rec| rec.error = Some(e.to_string()));
        }

        let record = handle.snapshot();
        self.sink.emit(&record);
        (record, result)
    }

    /// Execute multiple requests concurrently without request logs
    pub async fn execute_all(&self, requests: Vec<(Request, Bytes)>) -> Vec<Result<Response>> {
        let ctx = CallContext::new();
        let futures: Vec<_> = requests
            .into_iter()
            .map(|(request, body)| self.execute(&ctx, request, body))
            .collect();
        futures::future::join_all(futures).await
    }

    fn apply_default_headers(&self, request: &mut Request) {
        for name in self.config.default_headers.keys() {
            if request.headers.contains_key(name) {
                continue;
            }
            for value in self.config.default_headers.get_all(name) {
                request.headers.append(name.clone(), value.clone());
            }
        }
    }

    /// Installed interceptors
    pub fn interceptors(&self) -> &InterceptorChain {
        &self.chain
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("chain", &self.chain)
            .field("config", &self.config)
            .finish()
    }
}
