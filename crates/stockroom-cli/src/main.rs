//! Stockroom CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use stockroom_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    Status, run_activity, run_add_item, run_alerts, run_categories, run_dashboard,
    run_delete_category, run_delete_item, run_items, run_routes, run_users, run_whoami,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Items(args) => run_items(args),
        Command::AddItem(args) => run_add_item(args),
        Command::DeleteItem(args) => run_delete_item(args),
        Command::Categories(args) => run_categories(args),
        Command::DeleteCategory(args) => run_delete_category(args),
        Command::Users(args) => run_users(args),
        Command::Alerts(args) => run_alerts(args),
        Command::Dashboard(args) => run_dashboard(args),
        Command::Activity(args) => run_activity(args),
        Command::Whoami(args) => run_whoami(args),
        Command::Routes => run_routes(),
    };
    let exit_code = match result {
        Ok(Status::Done) => 0,
        Ok(Status::Refused) => 2,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
///
/// `--log-level` beats `-v`/`-q`, and either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level_filter(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_ansi(with_ansi)
}
