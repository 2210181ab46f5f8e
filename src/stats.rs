// File: stats.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatField {
    Followers,
    Following,
    Articles,
    Likes,
    Views,
}

impl StatField {
    pub const ALL: [StatField; 5] = [
        StatField::Followers,
        StatField::Following,
        StatField::Articles,
        StatField::Likes,
        StatField::Views,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatField::Followers => "followers",
            StatField::Following => "following",
            StatField::Articles => "articles",
            StatField::Likes => "likes",
            StatField::Views => "views",
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        StatField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown stat field '{}', expected one of: followers, following, articles, likes, views",
                    s
                )
            })
    }
}

/// One snapshot of the five profile counters. `None` means the value could
/// not be extracted from the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub articles: Option<u64>,
    pub likes: Option<u64>,
    pub views: Option<u64>,
}

impl Stats {
    pub fn get(&self, field: StatField) -> Option<u64> {
        match field {
            StatField::Followers => self.followers,
            StatField::Following => self.following,
            StatField::Articles => self.articles,
            StatField::Likes => self.likes,
            StatField::Views => self.views,
        }
    }

    pub fn set(&mut self, field: StatField, value: Option<u64>) {
        match field {
            StatField::Followers => self.followers = value,
            StatField::Following => self.following = value,
            StatField::Articles => self.articles = value,
            StatField::Likes => self.likes = value,
            StatField::Views => self.views = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        StatField::ALL.iter().all(|field| self.get(*field).is_none())
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = StatField::ALL
            .iter()
            .map(|field| match self.get(*field) {
                Some(value) => format!("{}={}", field, value),
                None => format!("{}=-", field),
            })
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// A dated entry of the history file.
///
/// Stat keys are always written, `null` when absent. Keys this crate does not
/// know about are kept in `extra` so a rewrite does not drop them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    pub date: String,
    #[serde(default)]
    pub followers: Option<u64>,
    #[serde(default)]
    pub following: Option<u64>,
    #[serde(default)]
    pub articles: Option<u64>,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StatRecord {
    pub fn new(date: impl Into<String>, stats: Stats) -> Self {
        Self {
            date: date.into(),
            followers: stats.followers,
            following: stats.following,
            articles: stats.articles,
            likes: stats.likes,
            views: stats.views,
            extra: Map::new(),
        }
    }

    pub fn stats(&self) -> Stats {
        Stats {
            followers: self.followers,
            following: self.following,
            articles: self.articles,
            likes: self.likes,
            views: self.views,
        }
    }

    pub fn set_stats(&mut self, stats: Stats) {
        self.followers = stats.followers;
        self.following = stats.following;
        self.articles = stats.articles;
        self.likes = stats.likes;
        self.views = stats.views;
    }
}

/// One element of the history array. Elements that do not fit `StatRecord`
/// (a fractional or negative count, a missing `date`, ...) are carried as raw
/// JSON and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoryEntry {
    Record(StatRecord),
    Other(Value),
}

impl HistoryEntry {
    pub fn date(&self) -> Option<&str> {
        match self {
            HistoryEntry::Record(record) => Some(record.date.as_str()),
            HistoryEntry::Other(value) => value.get("date").and_then(Value::as_str),
        }
    }

    pub fn stat(&self, field: StatField) -> Option<u64> {
        match self {
            HistoryEntry::Record(record) => record.stats().get(field),
            HistoryEntry::Other(value) => value.get(field.as_str()).and_then(Value::as_u64),
        }
    }

    pub fn as_record(&self) -> Option<&StatRecord> {
        match self {
            HistoryEntry::Record(record) => Some(record),
            HistoryEntry::Other(_) => None,
        }
    }

    /// Overwrites every stat key with the values of `record`, keeping the
    /// date and any other keys. A raw entry that fits afterwards becomes a
    /// typed record.
    pub fn merge(&mut self, record: StatRecord) {
        let retyped = match self {
            HistoryEntry::Record(existing) => {
                existing.set_stats(record.stats());
                existing.extra.extend(record.extra);
                None
            }
            HistoryEntry::Other(Value::Object(map)) => {
                let stats = record.stats();
                for field in StatField::ALL {
                    map.insert(field.as_str().to_string(), Value::from(stats.get(field)));
                }
                map.extend(record.extra);
                serde_json::from_value::<StatRecord>(Value::Object(map.clone())).ok()
            }
            HistoryEntry::Other(_) => None,
        };
        if let Some(record) = retyped {
            *self = HistoryEntry::Record(record);
        }
    }
}

impl From<StatRecord> for HistoryEntry {
    fn from(record: StatRecord) -> Self {
        HistoryEntry::Record(record)
    }
}
