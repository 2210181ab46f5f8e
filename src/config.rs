// File: config.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::path::{Path, PathBuf};

pub const URL_ENV_VAR: &str = "JUEJIN_USER_URL";
pub const DEFAULT_URL: &str = "https://juejin.cn/user/3659622444970574";
pub const DEFAULT_HISTORY_FILE: &str = "data/history.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:110.0) Gecko/20100101 Firefox/110.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigParameter {
    url: String,
    history_file: PathBuf,
    timeout: u64,
    user_agent: String,
}

impl Default for ConfigParameter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParameter {
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Defaults with the target URL taken from `JUEJIN_USER_URL` when it is set.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(URL_ENV_VAR).ok())
    }

    pub fn from_env_value(url: Option<String>) -> Self {
        let mut config = Self::new();
        if let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            config.set_url(url);
        }
        config
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_history_file(&mut self, history_file: impl Into<PathBuf>) {
        self.history_file = history_file.into();
    }

    pub fn history_file(&self) -> &Path {
        &self.history_file
    }

    pub fn set_timeout(&mut self, timeout: u64) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.user_agent = user_agent.into();
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
