//! CLI command dispatch
//!
//! `init` materializes the default configuration; `start` loads the
//! configuration, builds the pool, and serves until interrupted.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::http_server::{ApiState, HttpServer};
use crate::store::StorePool;

use super::args::{Cli, Command};
use super::errors::CliError;

/// Parse arguments and run the selected command
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

fn init(path: &Path) -> Result<(), CliError> {
    let config = AppConfig::default();
    config.write(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn start(path: &Path) -> Result<(), CliError> {
    init_tracing();

    let config = AppConfig::load(path)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let pool = StorePool::connect(&config.store)?;
        let state = Arc::new(ApiState::new(pool));
        let server = HttpServer::with_config(config.http, state);
        server.start().await?;
        Ok(())
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
