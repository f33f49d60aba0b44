//! CLI argument definitions for the Stockroom dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use rust_decimal::Decimal;
use stockroom_model::{CategoryFilter, CategoryId, Filter, SortKey, UserRole, UserStatus};

#[derive(Parser)]
#[command(
    name = "stockroom",
    version,
    about = "Stockroom - inventory dashboard in the terminal",
    long_about = "Browse and edit a Stockroom inventory from the terminal.\n\n\
                  Inventory and category commands work on a JSON fixture file;\n\
                  `whoami` asks the configured backend who is signed in."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show one page of the inventory table.
    Items(ItemsArgs),

    /// Add an item to the inventory.
    AddItem(AddItemArgs),

    /// Delete an item after confirmation.
    DeleteItem(DeleteArgs),

    /// List categories with their item counts.
    Categories(CategoriesArgs),

    /// Delete a category if no items reference it.
    DeleteCategory(DeleteArgs),

    /// List the user directory.
    Users(UsersArgs),

    /// Show alerts, optionally resolving one.
    Alerts(AlertsArgs),

    /// Show the dashboard totals and stock per category.
    Dashboard(FixtureArgs),

    /// Show recent changes, newest first.
    Activity(ActivityArgs),

    /// Ask the backend who is signed in.
    Whoami(WhoamiArgs),

    /// Print the dashboard route table.
    Routes,
}

#[derive(Parser)]
pub struct ItemsArgs {
    /// Inventory fixture (JSON with `categories` and `items`).
    #[arg(value_name = "FIXTURE")]
    pub fixture: PathBuf,

    /// Case-insensitive match on name or description.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Category id, or `all`.
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,

    /// Sort key: name, quantity or price.
    #[arg(long, default_value = "name")]
    pub sort: SortKey,

    /// 1-based page number; out-of-range pages are clamped.
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Parser)]
pub struct AddItemArgs {
    #[arg(value_name = "FIXTURE")]
    pub fixture: PathBuf,

    #[arg(long)]
    pub name: String,

    /// Category id (defaults to the first category).
    #[arg(long)]
    pub category: Option<CategoryId>,

    #[arg(long, default_value_t = 0)]
    pub quantity: u32,

    #[arg(long, default_value = "0")]
    pub price: Decimal,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "")]
    pub supplier: String,

    #[command(flatten)]
    pub actor: ActorArgs,

    /// Write the updated inventory back to the fixture file.
    #[arg(long)]
    pub save: bool,
}

#[derive(Parser)]
pub struct DeleteArgs {
    #[arg(value_name = "FIXTURE")]
    pub fixture: PathBuf,

    #[arg(value_name = "ID")]
    pub id: u32,

    /// Answer the confirmation prompt with "no".
    #[arg(long)]
    pub cancel: bool,

    #[command(flatten)]
    pub actor: ActorArgs,

    /// Write the updated inventory back to the fixture file.
    #[arg(long)]
    pub save: bool,
}

/// Who changes made by this command are credited to in the activity feed.
#[derive(Parser)]
pub struct ActorArgs {
    /// Name recorded in the activity feed.
    #[arg(long, value_name = "NAME")]
    pub actor: Option<String>,

    /// Role badge shown next to the actor.
    #[arg(long = "actor-role", value_name = "ROLE", default_value = "Staff")]
    pub actor_role: String,
}

#[derive(Parser)]
pub struct FixtureArgs {
    #[arg(value_name = "FIXTURE")]
    pub fixture: PathBuf,
}

#[derive(Parser)]
pub struct ActivityArgs {
    #[arg(value_name = "FIXTURE")]
    pub fixture: PathBuf,

    /// Show at most this many entries.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Parser)]
pub struct CategoriesArgs {
    #[arg(value_name = "FIXTURE")]
    pub fixture: PathBuf,

    /// Case-insensitive match on name or description.
    #[arg(long, default_value = "")]
    pub search: String,
}

#[derive(Parser)]
pub struct UsersArgs {
    /// Case-insensitive match on name or email.
    #[arg(long, default_value = "")]
    pub search: String,

    /// active, inactive or all.
    #[arg(long, default_value = "all")]
    pub status: Filter<UserStatus>,

    /// superadmin, admin, user or all.
    #[arg(long, default_value = "all")]
    pub role: Filter<UserRole>,
}

#[derive(Parser)]
pub struct AlertsArgs {
    /// Case-insensitive match on message or type.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Resolve the alert with this id before listing.
    #[arg(long, value_name = "ID")]
    pub resolve: Option<u32>,
}

#[derive(Parser)]
pub struct WhoamiArgs {
    /// Backend base URL (overrides settings and STOCKROOM_API_URL).
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Cookie header to send with the request.
    #[arg(long, value_name = "COOKIE")]
    pub cookie: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use tracing::level_filters::LevelFilter;

    use super::*;

    fn level(args: &[&str]) -> LevelFilter {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        cli.verbosity.tracing_level_filter()
    }

    #[test]
    fn verbosity_flags_match_their_help() {
        assert_eq!(level(&["stockroom", "routes"]), LevelFilter::WARN);
        assert_eq!(level(&["stockroom", "-v", "routes"]), LevelFilter::INFO);
        assert_eq!(level(&["stockroom", "-vv", "routes"]), LevelFilter::DEBUG);
        assert_eq!(level(&["stockroom", "-vvv", "routes"]), LevelFilter::TRACE);
        assert_eq!(level(&["stockroom", "-q", "routes"]), LevelFilter::ERROR);
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn actor_flags_are_optional() {
        let cli = Cli::try_parse_from(["stockroom", "delete-item", "inv.json", "3"]).unwrap();
        let Command::DeleteItem(args) = cli.command else {
            panic!("expected delete-item");
        };
        assert!(args.actor.actor.is_none());
        assert_eq!(args.actor.actor_role, "Staff");
    }
}
