// File: collect.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;
use log::info;

use super::{print_info, print_success, print_warning};
use crate::config::ConfigParameter;
use crate::extractor::StatExtractor;
use crate::http::HttpSource;
use crate::runner::{RunReport, Runner};
use crate::storage::HistoryStore;

pub fn execute(config: &ConfigParameter) -> Result<RunReport> {
    info!("Collecting stats from {}", config.url());
    print_info(&format!("Fetching {}", config.url()));

    let source = HttpSource::from_config(config)?;
    let runner = Runner::new(
        source,
        StatExtractor::default(),
        HistoryStore::new(config.history_file()),
    );

    let report = runner.run()?;
    if report.stats.is_empty() {
        print_warning("No stat could be read from the page, the record is all null");
    }
    print_success(&report.to_string());
    Ok(report)
}
