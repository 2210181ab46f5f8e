// File: mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;
use colored::*;

use crate::cli::ShowArgs;
use crate::config::ConfigParameter;
use crate::runner::RunReport;
use crate::storage::HistoryStore;

pub mod collect;
pub mod show;

pub fn handle_collect_command(config: &ConfigParameter) -> Result<RunReport> {
    collect::execute(config)
}

pub fn handle_show_command(args: &ShowArgs, store: &HistoryStore) -> Result<()> {
    show::execute(args, store)
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

fn format_count(value: Option<u64>) -> String {
    match value {
        Some(v) => {
            let digits = v.to_string();
            let mut out = String::with_capacity(digits.len() + digits.len() / 3);
            for (i, c) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    out.push(',');
                }
                out.push(c);
            }
            out
        }
        None => "-".to_string(),
    }
}
