//! PO formatter CLI.

use clap::{ColorChoice, Parser};
use po_cli::logging::{LogConfig, LogFormat, init_logging};
use po_cli::settings::SettingsStore;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{print_inspection_json, run_convert, run_inspect, run_settings};
use crate::summary::{print_convert_summary, print_inspection, print_vendors};
use crate::types::Destination;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let store = SettingsStore::discover();
    let result = match &cli.command {
        Command::Convert(args) => run_convert(args, &store).map(|outcome| {
            if !matches!(outcome.destination, Destination::Stdout) {
                print_convert_summary(&outcome);
            }
        }),
        Command::Inspect(args) => run_inspect(args).and_then(|inspection| {
            if args.json {
                print_inspection_json(&inspection)
            } else {
                print_inspection(&inspection);
                Ok(())
            }
        }),
        Command::Vendors => {
            print_vendors();
            Ok(())
        }
        Command::Settings(args) => run_settings(args, &store),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
