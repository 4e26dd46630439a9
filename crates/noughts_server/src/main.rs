//! Noughts - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts_server::{AppState, ServerConfig, init_tracing, router, simulate};
use std::path::PathBuf;
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            seed,
        } => run_server(config, host, port, seed).await,
        Command::Simulate { games, seed } => run_simulation(games, seed),
    }
}

/// Run the HTTP game service
async fn run_server(
    config_path: PathBuf,
    host: Option<String>,
    port: Option<u16>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = ServerConfig::load_or_default(&config_path)?;
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    init_tracing(config.log_filter());
    info!(?config, "Starting noughts game service");

    let app = router(AppState::from_config(&config));
    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
    }
}

/// Play simulated games and print the stats blob
#[instrument]
fn run_simulation(games: u32, seed: u64) -> Result<()> {
    init_tracing("warn");

    let stats = simulate(games, seed)?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
