//! stagebill CLI
//!
//! Runs either of the two stagebill HTTP apps against Postgres:
//! - `serve booking`: server-rendered venue/artist/show booking site
//! - `serve trivia`: JSON trivia API backing the quiz frontend
//! - `migrate`: apply schema migrations without serving

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use commands::completions::CompletionsArgs;
use commands::migrate::MigrateArgs;
use commands::serve::ServeArgs;
use config::StagebillConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "stagebill",
    version,
    about = "Booking site and trivia quiz API backed by Postgres",
    long_about = "Serve the venue/artist/show booking site or the trivia quiz API. \
                  Settings come from flags, the environment (.env included), \
                  and ~/.stagebill/config.toml, in that order."
)]
struct Cli {
    /// Config file (default: ~/.stagebill/config.toml, if present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug-level logging when RUST_LOG is unset
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (needs the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an HTTP server (booking site or trivia API)
    Serve(ServeArgs),
    /// Apply pending database migrations
    Migrate(MigrateArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so `env = "DATABASE_URL"` sees .env values
    config::load_dotenv();
    let Cli {
        config,
        debug,
        otel,
        command,
    } = Cli::parse();

    // Completions never need config, logging, or a database
    if let Commands::Completions(args) = command {
        return commands::run_completions(args, Cli::command());
    }

    tracing_setup::init(&TracingConfig { debug, otel })?;

    let result = run(command, config).await;
    tracing_setup::shutdown_otel();
    result
}

async fn run(command: Commands, config_path: Option<PathBuf>) -> Result<()> {
    let config = StagebillConfig::load(config_path.as_deref())?;

    match command {
        Commands::Serve(args) => commands::run_serve(args, &config).await,
        Commands::Migrate(args) => commands::run_migrate(args, &config).await,
        Commands::Completions(args) => commands::run_completions(args, Cli::command()),
    }
}
