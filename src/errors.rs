// File: errors.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::fmt;

/// Why the profile page could not be fetched. Every variant is fatal for a run.
#[derive(Debug)]
pub enum FetchError {
    Client(reqwest::Error),
    Timeout { url: String, source: reqwest::Error },
    Request { url: String, source: reqwest::Error },
    Status { url: String, status: u16 },
    Body { url: String, source: reqwest::Error },
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Client(_) => None,
            Self::Timeout { url, .. }
            | Self::Request { url, .. }
            | Self::Status { url, .. }
            | Self::Body { url, .. } => Some(url),
        }
    }

    pub(crate) fn from_send(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                source: error,
            }
        } else {
            Self::Request {
                url: url.to_string(),
                source: error,
            }
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(e) => write!(f, "Failed to build HTTP client: {}", e),
            Self::Timeout { url, source } => write!(f, "Request to {} timed out: {}", url, source),
            Self::Request { url, source } => write!(f, "Request to {} failed: {}", url, source),
            Self::Status { url, status } => write!(f, "Request to {} returned HTTP {}", url, status),
            Self::Body { url, source } => {
                write!(f, "Failed to read response body from {}: {}", url, source)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client(e) => Some(e),
            Self::Timeout { source, .. } => Some(source),
            Self::Request { source, .. } => Some(source),
            Self::Status { .. } => None,
            Self::Body { source, .. } => Some(source),
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
