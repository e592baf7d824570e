mod cli;
mod commands;
mod error;
mod output;
mod routes;
mod state;
mod timestamp;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(&cli);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

/// `RUST_LOG` wins, then `--log-level`, then the `-v` count. The service
/// logs at info by default; one-shot commands stay quiet.
fn init_tracing(cli: &Cli) {
    let quiet = if matches!(cli.command, Command::Serve(_)) {
        "info"
    } else {
        "warn"
    };
    let filter = match cli.global.verbose {
        0 => quiet,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let directive = cli.global.log_level.as_deref().unwrap_or(filter);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Serve(args) => commands::serve::handle(args, &cli.global).await,
        Command::Quote(args) => commands::quote::handle(&args, &cli.global),
        Command::Rates(args) => commands::rates::handle(&args, &cli.global),
        Command::Config(args) => commands::config_cmd::handle(&args, &cli.global),
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "parkrate", &mut std::io::stdout());
            Ok(())
        }
    }
}
