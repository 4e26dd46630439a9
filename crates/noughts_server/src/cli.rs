//! Command-line interface for noughts.

use clap::{Parser, Subcommand};

/// Noughts - stateless tic-tac-toe game service
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Stateless tic-tac-toe rules service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game service
    Serve {
        /// Path to the TOML config file (optional)
        #[arg(short, long, default_value = "noughts.toml")]
        config: std::path::PathBuf,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Fixed opponent seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play random games against the built-in opponent and print the tally
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        games: u32,

        /// Random seed for reproducibility
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}
