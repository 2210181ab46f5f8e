// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::ConfigParameter;
use crate::stats::StatField;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(
        long = "url",
        help = "Profile page to fetch (default: $JUEJIN_USER_URL or the built-in profile)",
        global = true
    )]
    pub url: Option<String>,

    #[arg(
        long = "history-file",
        help = "JSON history file (default: data/history.json)",
        global = true
    )]
    pub history_file: Option<PathBuf>,

    #[arg(
        short = 't',
        long = "timeout",
        help = "HTTP request timeout in seconds (default: 30)",
        global = true
    )]
    pub timeout: Option<u64>,

    #[arg(long = "log-level", default_value = "warn", global = true)]
    pub log_level: String,

    #[arg(
        short = 'v',
        long = "verbose",
        help = "Enable verbose output",
        global = true
    )]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long = "quiet",
        help = "Reduce output verbosity",
        global = true
    )]
    pub quiet: bool,

    #[arg(long = "no-color", help = "Disable colored output", global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch today's stats and upsert them into the history file (default)
    Collect,
    /// Print the stored history
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[arg(
        short = 'f',
        long = "field",
        help = "Only print one stat as a date series: followers, following, articles, likes, views"
    )]
    pub field: Option<StatField>,

    #[arg(short = 'l', long = "limit", help = "Only print the most recent N days")]
    pub limit: Option<usize>,
}

impl Cli {
    pub fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        if self.verbose {
            return LevelFilter::Debug;
        }
        self.log_level.parse().unwrap_or(LevelFilter::Warn)
    }

    /// Environment defaults with command line flags applied on top.
    pub fn to_config(&self) -> ConfigParameter {
        let mut config = ConfigParameter::from_env();
        self.apply_to(&mut config);
        config
    }

    pub fn apply_to(&self, config: &mut ConfigParameter) {
        if let Some(ref url) = self.url {
            config.set_url(url.clone());
        }
        if let Some(ref history_file) = self.history_file {
            config.set_history_file(history_file.clone());
        }
        if let Some(timeout) = self.timeout {
            config.set_timeout(timeout);
        }
    }
}
