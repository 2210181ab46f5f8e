// File: extractor.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::httpinner::HttpInner;
use crate::stats::{StatField, Stats};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Separator characters removed from a captured number before parsing.
pub const THOUSANDS_SEPARATORS: &[char] = &[','];

/// Built-in patterns. Counts are ASCII digits only; `\d` would also match
/// other Unicode decimal digits, which do not parse as `u64`.
pub const DEFAULT_PATTERNS: &[(StatField, &str)] = &[
    (StatField::Followers, r"关注者\s*([0-9,]+)"),
    (StatField::Following, r"关注了\s*([0-9,]+)"),
    // "文章 65", digits may follow after spaces or a line break
    (StatField::Articles, r"文章\s*([0-9,]+)"),
    (StatField::Likes, r"文章被点赞\s*([0-9,]+)"),
    (StatField::Views, r"文章被阅读\s*([0-9,]+)"),
];

static DEFAULT_EXTRACTOR: Lazy<StatExtractor> = Lazy::new(|| {
    StatExtractor::new(DEFAULT_PATTERNS).expect("built-in stat patterns must compile")
});

/// Maps each stat field to the regex that locates its value in page text.
#[derive(Debug, Clone)]
pub struct StatExtractor {
    patterns: Vec<(StatField, Regex)>,
}

impl StatExtractor {
    pub fn new(patterns: &[(StatField, &str)]) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|(field, pattern)| Ok((*field, Regex::new(pattern)?)))
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> impl Iterator<Item = (StatField, &str)> {
        self.patterns
            .iter()
            .map(|(field, regex)| (*field, regex.as_str()))
    }

    /// Best-effort extraction: a field whose pattern does not match, or whose
    /// capture does not parse, stays `None` without affecting the others.
    pub fn extract(&self, text: &str) -> Stats {
        let mut stats = Stats::default();
        for (field, regex) in &self.patterns {
            let value = extract_first_number(regex, text);
            if value.is_none() {
                debug!("No value found for {} using /{}/", field, regex.as_str());
            }
            stats.set(*field, value);
        }
        stats
    }

    pub fn extract_page(&self, page: &HttpInner) -> Stats {
        self.extract(page.body())
    }
}

impl Default for StatExtractor {
    fn default() -> Self {
        DEFAULT_EXTRACTOR.clone()
    }
}

/// Parses the first match of `regex` in `text`. Capture group 1 is used when
/// present, otherwise the whole match. Only ASCII digits parse; a capture
/// holding other digits reads as `None`.
pub fn extract_first_number(regex: &Regex, text: &str) -> Option<u64> {
    let caps = regex.captures(text)?;
    let matched = caps.get(1).or_else(|| caps.get(0))?;
    let digits: String = matched
        .as_str()
        .chars()
        .filter(|c| !THOUSANDS_SEPARATORS.contains(c))
        .collect();
    digits.parse::<u64>().ok()
}
