// File: show.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;
use colored::*;

use super::{format_count, print_info, print_warning};
use crate::cli::ShowArgs;
use crate::stats::{HistoryEntry, StatField};
use crate::storage::{History, HistoryStore};

pub fn execute(args: &ShowArgs, store: &HistoryStore) -> Result<()> {
    let history = store.load();

    if history.is_empty() {
        print_warning(&format!("No history found in {}", store.path().display()));
        return Ok(());
    }

    print_info(&format!(
        "{} days recorded in {}",
        history.len(),
        store.path().display()
    ));

    match args.field {
        Some(field) => display_series(&history, field, args.limit),
        None => display_table(tail(history.entries(), args.limit)),
    }
    Ok(())
}

fn tail<T>(items: &[T], limit: Option<usize>) -> &[T] {
    match limit {
        Some(n) if n < items.len() => &items[items.len() - n..],
        _ => items,
    }
}

fn display_table(entries: &[HistoryEntry]) {
    println!();
    println!(
        "{:<12} {:>12} {:>12} {:>10} {:>12} {:>14}",
        "Date".bold(),
        "Followers".bold(),
        "Following".bold(),
        "Articles".bold(),
        "Likes".bold(),
        "Views".bold()
    );
    println!("{}", "─".repeat(77).bright_black());

    for entry in entries {
        let date = entry.date().unwrap_or("?");
        println!(
            "{:<12} {:>12} {:>12} {:>10} {:>12} {:>14}",
            date.cyan(),
            format_count(entry.stat(StatField::Followers)),
            format_count(entry.stat(StatField::Following)),
            format_count(entry.stat(StatField::Articles)),
            format_count(entry.stat(StatField::Likes)),
            format_count(entry.stat(StatField::Views))
        );
    }
}

fn display_series(history: &History, field: StatField, limit: Option<usize>) {
    let series = history.series(field);
    let points = tail(&series, limit);

    println!();
    println!("{}", field.as_str().bold().bright_white());

    let mut previous: Option<u64> = None;
    for (date, value) in points {
        let delta = match (previous, value) {
            (Some(before), Some(now)) if *now > before => format!("+{}", now - before).green(),
            (Some(before), Some(now)) if *now < before => format!("-{}", before - now).red(),
            (Some(_), Some(_)) => "±0".dimmed(),
            _ => "".normal(),
        };
        println!("  {} {:>14} {}", date.cyan(), format_count(*value), delta);
        if value.is_some() {
            previous = *value;
        }
    }
}
