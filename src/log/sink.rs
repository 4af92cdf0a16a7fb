// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Destinations for finished request log records

use std::sync::Arc;

use parking_lot::RwLock;

use super::record::HttpRequestLog;

/// Receives a record once its call has finished
pub trait RequestLogSink: Send + Sync {
    /// Emit one record
    fn emit(&self, record: &HttpRequestLog);
}

/// Emits records as `tracing` events under the `restlog::request` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl RequestLogSink for TracingSink {
    fn emit(&self, record: &HttpRequestLog) {
        let json = match serde_json::to_string(record) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize request log");
                return;
            }
        };

        tracing::info!(
            target: "restlog::request",
            method = record.method.as_deref().unwrap_or("-"),
            url = record.url.as_deref().unwrap_or("-"),
            status = ?record.http_status,
            elapsed_ms = ?record.elapsed().map(|d| d.num_milliseconds()),
            record = %json,
            "Request log"
        );
    }
}

/// Keeps records in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Arc<RwLock<Vec<HttpRequestLog>>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Records emitted so far
    pub fn records(&self) -> Vec<HttpRequestLog> {
        self.records.read().clone()
    }

    /// Drop all stored records
    pub fn clear(&self) {
        self.records.write().clear();
    }
}

impl RequestLogSink for MemorySink {
    fn emit(&self, record: &HttpRequestLog) {
        self.records.write().push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_collects() {
        let sink = MemorySink::new();
        let shared = sink.clone();

        shared.emit(&HttpRequestLog::for_url("https://example.com/a"));
        shared.emit(&HttpRequestLog::for_url("https://example.com/b"));

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].url.as_deref(), Some("https://example.com/b"));

        sink.clear();
        assert!(shared.records().is_empty());
    }

    #[test]
    fn test_tracing_sink_accepts_partial_record() {
        TracingSink.emit(&HttpRequestLog::new());
    }
}
