// File: runner.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use log::{info, warn};
use std::fmt;

use crate::extractor::StatExtractor;
use crate::http::PageSource;
use crate::stats::{StatRecord, Stats};
use crate::storage::{HistoryStore, UpsertOutcome};

/// Dates are recorded in Beijing time.
pub const UTC_OFFSET_SECS: i32 = 8 * 60 * 60;

pub fn beijing_offset() -> FixedOffset {
    FixedOffset::east_opt(UTC_OFFSET_SECS).expect("+08:00 is a valid offset")
}

pub fn date_string(now: DateTime<Utc>) -> String {
    now.with_timezone(&beijing_offset())
        .format("%Y-%m-%d")
        .to_string()
}

pub fn beijing_today() -> String {
    date_string(Utc::now())
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub date: String,
    pub stats: Stats,
    pub outcome: UpsertOutcome,
    pub total_records: usize,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.outcome {
            UpsertOutcome::Inserted => "Recorded",
            UpsertOutcome::Updated => "Updated",
        };
        write!(f, "{} data for {}: {}", verb, self.date, self.stats)
    }
}

/// Fetch, extract, upsert, save. Runs once with no retries.
pub struct Runner<S: PageSource> {
    source: S,
    extractor: StatExtractor,
    store: HistoryStore,
}

impl<S: PageSource> Runner<S> {
    pub fn new(source: S, extractor: StatExtractor, store: HistoryStore) -> Self {
        Self {
            source,
            extractor,
            store,
        }
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn run(&self) -> Result<RunReport> {
        self.run_for(&beijing_today())
    }

    /// A failed fetch returns before the history file is touched.
    pub fn run_for(&self, date: &str) -> Result<RunReport> {
        let page = self
            .source
            .fetch_page()
            .context("Failed to fetch data")?;

        let stats = self.extractor.extract_page(&page);
        if stats.is_empty() {
            warn!("No stat could be extracted from {}", page.url());
        }

        let mut history = self.store.load();
        let outcome = history.upsert(StatRecord::new(date, stats));
        self.store.save(&history)?;
        info!(
            "{:?} {} in {} ({} records)",
            outcome,
            date,
            self.store.path().display(),
            history.len()
        );

        Ok(RunReport {
            date: date.to_string(),
            stats,
            outcome,
            total_records: history.len(),
        })
    }
}
