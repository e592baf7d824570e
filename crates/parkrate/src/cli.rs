//! Clap derive structures for the `parkrate` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// parkrate -- parking rate lookup service
#[derive(Debug, Parser)]
#[command(
    name = "parkrate",
    version,
    about = "Look up parking rates by weekday and time of day",
    long_about = "Serves and queries a table of weekday/time-of-day parking rates.\n\n\
        Rates are defined as compact JSON documents and expanded into one\n\
        rule per weekday; a query interval must fall inside a single rule.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (TOML, or JSON with a .json extension)
    #[arg(long, short = 'c', env = "PARKRATE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "PARKRATE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Explicit log level or filter directive (overrides -v)
    #[arg(long, short = 'l', env = "LOG_LEVEL", global = true)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP rate service
    Serve(ServeArgs),

    /// Price a single time window against a rates file
    #[command(alias = "q")]
    Quote(QuoteArgs),

    /// Validate a rates file and show the expanded rule table
    Rates(RatesArgs),

    /// Inspect configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Subcommand arguments ─────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind host (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides config)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Initial rates document (overrides config)
    #[arg(long, short = 'r')]
    pub rates: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Window start, e.g. 2015-07-01T07:00:00-05:00
    #[arg(long, short = 's')]
    pub start: String,

    /// Window end, e.g. 2015-07-01T12:00:00-05:00
    #[arg(long, short = 'e')]
    pub end: String,

    /// Rates document (overrides config)
    #[arg(long, short = 'r')]
    pub rates: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RatesArgs {
    /// Rates document (overrides config)
    #[arg(long, short = 'r')]
    pub rates: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,

    /// Print the default config file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
