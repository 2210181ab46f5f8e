// File: storage.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::stats::{HistoryEntry, StatField, StatRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Per-date stat snapshots, at most one per date, ascending by date.
///
/// Entries read from disk that do not fit `StatRecord` are kept in place as
/// raw JSON, so a rewrite never loses them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from records in any order. Later duplicates of a date
    /// overwrite earlier ones, as repeated upserts would.
    pub fn from_records(records: Vec<StatRecord>) -> Self {
        let mut history = Self::new();
        for record in records {
            history.upsert(record);
        }
        history
    }

    /// Keeps entries exactly as given, order included.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn records(&self) -> impl Iterator<Item = &StatRecord> {
        self.entries.iter().filter_map(HistoryEntry::as_record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, date: &str) -> Option<&StatRecord> {
        self.records().find(|r| r.date == date)
    }

    pub fn latest(&self) -> Option<&StatRecord> {
        self.records().last()
    }

    /// An existing entry for the date gets every stat field overwritten, nulls
    /// included; its date and unknown keys stay. Otherwise the record is
    /// appended and the sequence re-sorted by date.
    pub fn upsert(&mut self, record: StatRecord) -> UpsertOutcome {
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|e| e.date() == Some(record.date.as_str()))
        {
            existing.merge(record);
            return UpsertOutcome::Updated;
        }

        self.entries.push(HistoryEntry::Record(record));
        // ISO dates sort chronologically as strings; undated entries go first
        self.entries.sort_by(|a, b| a.date().cmp(&b.date()));
        UpsertOutcome::Inserted
    }

    /// Data points of one stat in date order, for charting. Undated entries
    /// are skipped.
    pub fn series(&self, field: StatField) -> Vec<(&str, Option<u64>)> {
        self.entries
            .iter()
            .filter_map(|e| e.date().map(|date| (date, e.stat(field))))
            .collect()
    }
}

/// The JSON file a `History` lives in.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: a missing, unreadable or malformed file, or one that does
    /// not hold a JSON array, reads as an empty history. Array elements are
    /// all kept, typed or not.
    pub fn load(&self) -> History {
        match self.try_load() {
            Ok(history) => history,
            Err(e) => {
                debug!(
                    "Starting with empty history for {}: {:#}",
                    self.path.display(),
                    e
                );
                History::new()
            }
        }
    }

    fn try_load(&self) -> Result<History> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let entries: Vec<HistoryEntry> =
            serde_json::from_str(&text).context("Failed to parse history array")?;
        let untyped = entries.iter().filter(|e| e.as_record().is_none()).count();
        if untyped > 0 {
            warn!(
                "{} entries in {} are not stat records and are kept as-is",
                untyped,
                self.path.display()
            );
        }
        Ok(History::from_entries(entries))
    }

    /// Replaces the file with the pretty-printed history, creating the parent
    /// directory if needed. Non-ASCII text is written as-is.
    pub fn save(&self, history: &History) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory {}", parent.display())
                })?;
            }
        }

        let json = serde_json::to_string_pretty(history.entries())
            .context("Failed to serialize history")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        debug!(
            "Saved {} records to {}",
            history.len(),
            self.path.display()
        );
        Ok(())
    }
}
