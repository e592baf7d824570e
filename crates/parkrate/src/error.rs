//! CLI error types with miette diagnostics.
//!
//! Maps config and core errors into user-facing errors with actionable
//! help text and process exit codes.

use miette::Diagnostic;
use thiserror::Error;

use parkrate_config::ConfigError;
use parkrate_core::RangeError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const SERVE: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Input ────────────────────────────────────────────────────────
    #[error("Invalid timestamp '{value}'")]
    #[diagnostic(
        code(parkrate::timestamp),
        help("Timestamps must be in format %Y-%m-%dT%H:%M:%S%z, e.g. 2015-07-01T07:00:00-05:00")
    )]
    Timestamp { value: String },

    #[error("{0}")]
    #[diagnostic(
        code(parkrate::range),
        help("A quote window must run forward and stay within one calendar date.")
    )]
    Range(#[from] RangeError),

    // ── Configuration ────────────────────────────────────────────────
    #[error("No rates document configured")]
    #[diagnostic(
        code(parkrate::no_rates),
        help(
            "Pass --rates <FILE>, or set rates.rates_filepath in {path}\n\
             (or PARKRATE_RATES__RATES_FILEPATH)."
        )
    )]
    NoRates { path: String },

    #[error(transparent)]
    #[diagnostic(code(parkrate::config))]
    Config(#[from] ConfigError),

    // ── Server ───────────────────────────────────────────────────────
    #[error("Could not bind {addr}")]
    #[diagnostic(
        code(parkrate::bind),
        help("Check that the port is free, or choose another with --port.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server failed")]
    #[diagnostic(code(parkrate::serve))]
    Serve(#[source] std::io::Error),

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON output: {0}")]
    #[diagnostic(code(parkrate::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Timestamp { .. } | Self::Range(_) => exit_code::USAGE,
            Self::NoRates { .. } | Self::Config(_) => exit_code::CONFIG,
            Self::Bind { .. } | Self::Serve(_) => exit_code::SERVE,
            Self::Io(_) | Self::Json(_) => exit_code::GENERAL,
        }
    }
}
