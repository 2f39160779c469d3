//! HTTP server commands
//!
//! One process serves one app: the booking site or the trivia API.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use stagebill_server::db::{create_pool_with_options, run_migrations};
use stagebill_server::{run_server, App, ServerConfig};

use super::DatabaseArgs;
use crate::config::StagebillConfig;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(subcommand)]
    pub app: ServeApp,
}

#[derive(Subcommand, Debug)]
pub enum ServeApp {
    /// Server-rendered venue/artist/show booking site (default 127.0.0.1:5000)
    Booking(BookingArgs),
    /// JSON trivia API for the quiz frontend (default 127.0.0.1:5001)
    Trivia(TriviaArgs),
}

#[derive(Args, Debug)]
pub struct BookingArgs {
    /// Address to bind to
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

#[derive(Args, Debug)]
pub struct TriviaArgs {
    /// Address to bind to
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow any method and request header from any origin
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

impl ServeApp {
    fn resolve(self, config: &StagebillConfig) -> (App, ServerConfig, DatabaseArgs) {
        match self {
            ServeApp::Booking(args) => {
                let server = ServerConfig {
                    bind_addr: config.bind_addr(App::Booking, args.bind),
                    ..ServerConfig::for_app(App::Booking)
                };
                (App::Booking, server, args.db)
            }
            ServeApp::Trivia(args) => {
                let server = ServerConfig {
                    bind_addr: config.bind_addr(App::Trivia, args.bind),
                    cors_permissive: config.cors_permissive(args.cors_permissive),
                };
                (App::Trivia, server, args.db)
            }
        }
    }
}

/// Run one of the HTTP servers until ctrl-c or SIGTERM
pub async fn run_serve(args: ServeArgs, config: &StagebillConfig) -> Result<()> {
    let (app, server_config, db) = args.app.resolve(config);
    let database_url = config.database_url(db.database_url)?;

    tracing::info!(app = app.name(), bind = %server_config.bind_addr, "Starting stagebill server");

    let pool = create_pool_with_options(&database_url, config.max_connections())
        .await
        .context("Failed to create database pool")?;

    run_migrations(&pool)
        .await
        .context("Failed to apply database migrations")?;

    run_server(pool, app, server_config)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivia_flags_layer_over_config() {
        let config = StagebillConfig::parse("[trivia]\ncors_permissive = true").unwrap();
        let app = ServeApp::Trivia(TriviaArgs {
            bind: Some("127.0.0.1:9001".parse().unwrap()),
            cors_permissive: false,
            db: DatabaseArgs::default(),
        });

        let (app, server, _) = app.resolve(&config);
        assert_eq!(app, App::Trivia);
        assert_eq!(server.bind_addr.port(), 9001);
        assert!(server.cors_permissive);
    }

    #[test]
    fn booking_never_enables_cors() {
        let config = StagebillConfig::parse("[trivia]\ncors_permissive = true").unwrap();
        let app = ServeApp::Booking(BookingArgs {
            bind: None,
            db: DatabaseArgs::default(),
        });

        let (app, server, _) = app.resolve(&config);
        assert_eq!(app, App::Booking);
        assert_eq!(server.bind_addr, App::Booking.default_bind_addr());
        assert!(!server.cors_permissive);
    }
}
