//! Command-line entry point for the job tracker service.
//!
//! Usage:
//!
//! ```text
//! jobtrack listen    # migrate, then serve the HTTP API
//! jobtrack migrate   # apply pending migrations and exit
//! ```
//!
//! Settings come from the environment (see [`jobtrack::config::Settings`]).

use clap::{Parser, Subcommand};
use jobtrack::{config::Settings, server, telemetry};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(about = "tracks job applications over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply migrations, then serve the HTTP API.
    Listen,
    /// Apply pending migrations and exit.
    Migrate,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    telemetry::init(&settings.log_filter);

    let outcome = match cli.command {
        Command::Listen => server::listen(&settings).await,
        Command::Migrate => server::migrate(&settings).await,
    };
    if let Err(err) = &outcome {
        tracing::error!(error = %err, "jobtrack failed");
    }
    outcome.map_err(Into::into)
}
