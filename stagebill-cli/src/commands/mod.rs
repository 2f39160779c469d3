//! Command implementations for the stagebill CLI

pub mod completions;
pub mod migrate;
pub mod serve;

use clap::Args;

pub use completions::run_completions;
pub use migrate::run_migrate;
pub use serve::run_serve;

/// Connection flag shared by every command that touches Postgres
#[derive(Args, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// Database URL (overrides the config file)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}
