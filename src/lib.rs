// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_inception)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod http;
pub mod httpinner;
pub mod runner;
pub mod stats;
pub mod storage;

#[cfg(test)]
mod config_tests;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_wire_together() {
        let config = config::ConfigParameter::default();
        let store = storage::HistoryStore::new(config.history_file());
        assert_eq!(store.path(), std::path::Path::new(config::DEFAULT_HISTORY_FILE));

        let extractor = extractor::StatExtractor::default();
        assert_eq!(extractor.patterns().count(), stats::StatField::ALL.len());

        let page = httpinner::HttpInner::from_body(config.url(), "关注者 3");
        assert_eq!(extractor.extract_page(&page).followers, Some(3));
        assert_eq!(page.status(), 200);
    }
}
