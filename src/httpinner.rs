// File: httpinner.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use reqwest::header::HeaderMap;

/// A fetched profile page.
#[derive(Debug, Clone)]
pub struct HttpInner {
    body: String,
    headers: HeaderMap,
    status: u16,
    url: String,
}

impl HttpInner {
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn new_with_all(headers: HeaderMap, body: String, status: u16, url: String) -> Self {
        HttpInner {
            body,
            headers,
            status,
            url,
        }
    }

    /// A 200 page with the given body, used for fixtures.
    pub fn from_body(url: impl Into<String>, body: impl Into<String>) -> Self {
        HttpInner {
            body: body.into(),
            headers: HeaderMap::new(),
            status: 200,
            url: url.into(),
        }
    }
}
