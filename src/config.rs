// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! File-based client properties
//!
//! `RestLogConfig` is the serialized form of `HttpClientConfig`. Every field
//! is optional in the source document and falls back to the client default.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;

/// Client properties as read from JSON
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RestLogConfig {
    /// Install the request logging interceptor
    pub enabled: bool,
    /// User agent override
    pub user_agent: Option<String>,
    /// Default timeout in milliseconds
    pub timeout_ms: u64,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Proxy URL
    pub proxy: Option<String>,
    /// Accept invalid certificates
    pub accept_invalid_certs: bool,
    /// Headers sent with every request
    pub default_headers: HashMap<String, String>,
}

impl Default for RestLogConfig {
    fn default() -> Self {
        let defaults = HttpClientConfig::default();
        Self {
            enabled: defaults.log_requests,
            user_agent: None,
            timeout_ms: defaults.timeout.as_millis() as u64,
            max_redirects: defaults.max_redirects,
            proxy: None,
            accept_invalid_certs: defaults.accept_invalid_certs,
            default_headers: HashMap::new(),
        }
    }
}

impl RestLogConfig {
    /// Parse properties from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read properties from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded client properties");
        Ok(config)
    }

    /// Convert into a client configuration
    ///
    /// Default headers given here are added on top of the client defaults.
    pub fn into_client_config(self) -> Result<HttpClientConfig> {
        let mut config = HttpClientConfig::default();

        for (name, value) in &self.default_headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| Error::config(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = HeaderValue::try_from(value.as_str())
                .map_err(|e| Error::config(format!("Invalid value for header '{}': {}", name, e)))?;
            config.default_headers.insert(header_name, header_value);
        }

        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }
        config.log_requests = self.enabled;
        config.timeout = Duration::from_millis(self.timeout_ms);
        config.max_redirects = self.max_redirects;
        config.proxy = self.proxy;
        config.accept_invalid_certs = self.accept_invalid_certs;

        Ok(config)
    }
}
