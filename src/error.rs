// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for restlog
//!
//! Transport failures keep their original variant so callers can match on
//! them after they pass through the interceptor chain untouched.

use thiserror::Error;

/// Result type alias for restlog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for restlog
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed in the transport
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Check if the transport gave up waiting
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout(),
            Error::Io(e) => e.kind() == std::io::ErrorKind::TimedOut,
            _ => false,
        }
    }

    /// Check if this failure came from the transport (network or I/O)
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Io(_))
    }
}
