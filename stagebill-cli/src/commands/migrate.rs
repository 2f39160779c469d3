//! Apply pending schema migrations and exit

use anyhow::{Context, Result};
use clap::Args;

use stagebill_server::db::{create_pool_with_options, run_migrations};

use super::DatabaseArgs;
use crate::config::StagebillConfig;

#[derive(Args, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs, config: &StagebillConfig) -> Result<()> {
    let database_url = config.database_url(args.db.database_url)?;

    let pool = create_pool_with_options(&database_url, 1)
        .await
        .context("Failed to create database pool")?;

    run_migrations(&pool)
        .await
        .context("Failed to apply database migrations")?;

    tracing::info!("Database schema is up to date");
    pool.close().await;
    Ok(())
}
