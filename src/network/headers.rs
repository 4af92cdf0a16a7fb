// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Header filtering for request logs

use std::collections::HashMap;

use reqwest::header::HeaderMap;

use crate::log::LoggedHeaders;

/// Multi-valued header collection, name to ordered values
pub type HeaderMultiMap = HashMap<String, Vec<String>>;

/// Group a `HeaderMap` by name, keeping value order per name
pub fn group_header_map(headers: &HeaderMap) -> HeaderMultiMap {
    let mut grouped = HeaderMultiMap::with_capacity(headers.keys_len());
    for (name, value) in headers {
        grouped
            .entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    grouped
}

/// Copy of `headers` without blank names or empty value lists
///
/// Names pass through as given. `None` in, `None` out.
pub fn filter_headers(headers: Option<&HeaderMultiMap>) -> Option<LoggedHeaders> {
    let headers = headers?;
    Some(
        headers
            .iter()
            .filter(|(name, values)| !name.trim().is_empty() && !values.is_empty())
            .map(|(name, values)| (name.clone(), values.clone()))
            .collect(),
    )
}
