// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use log::debug;
use simple_logger::SimpleLogger;

use juejin_stats::cli::{Cli, Commands};
use juejin_stats::commands::{handle_collect_command, handle_show_command, print_error};
use juejin_stats::storage::HistoryStore;

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = SimpleLogger::new().with_level(cli.level_filter()).init() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = cli.to_config();
    debug!("Using configuration: {:?}", config);

    let result = match cli.command {
        None | Some(Commands::Collect) => handle_collect_command(&config).map(|_| ()),
        Some(Commands::Show(ref args)) => {
            handle_show_command(args, &HistoryStore::new(config.history_file()))
        }
    };

    if let Err(e) = result {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
