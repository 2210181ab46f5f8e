// File: http.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::ConfigParameter;
use crate::errors::{FetchError, FetchResult};
use crate::httpinner::HttpInner;
use log::{debug, info};
use reqwest::header::{self, HeaderMap, HeaderValue};
use std::time::Duration;

const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.9,en;q=0.8";

/// Anything that can hand the runner a page to extract from.
pub trait PageSource {
    fn fetch_page(&self) -> FetchResult<HttpInner>;
}

#[derive(Debug, Clone)]
pub struct Http {
    client: reqwest::blocking::Client,
    timeout: u64,
}

impl Http {
    pub fn new(config: &ConfigParameter) -> FetchResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE),
        );

        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout()))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Http {
            client,
            timeout: config.timeout(),
        })
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Issues exactly one GET. Error statuses, transport failures and
    /// timeouts are returned as `FetchError`; nothing is retried.
    pub fn fetch(&self, url: &str) -> FetchResult<HttpInner> {
        debug!("GET {} (timeout {}s)", url, self.timeout);

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::from_send(url, e))?;

        let status = resp.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = resp.url().to_string();
        let headers = resp.headers().clone();
        let body = resp.text().map_err(|e| FetchError::Body {
            url: url.to_string(),
            source: e,
        })?;

        info!(
            "Fetched {} ({} bytes, HTTP {})",
            final_url,
            body.len(),
            status.as_u16()
        );
        Ok(HttpInner::new_with_all(
            headers,
            body,
            status.as_u16(),
            final_url,
        ))
    }

    pub fn bind(self, url: impl Into<String>) -> HttpSource {
        HttpSource {
            http: self,
            url: url.into(),
        }
    }
}

/// An `Http` client bound to the configured profile URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: Http,
    url: String,
}

impl HttpSource {
    pub fn from_config(config: &ConfigParameter) -> FetchResult<Self> {
        Ok(Http::new(config)?.bind(config.url()))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PageSource for HttpSource {
    fn fetch_page(&self) -> FetchResult<HttpInner> {
        self.http.fetch(&self.url)
    }
}
