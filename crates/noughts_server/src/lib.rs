//! Noughts server - a stateless JSON game service.
//!
//! The browser client owns the game. Each request carries the whole board,
//! the server validates it, resolves the move with [`noughts_rules`], and
//! hands the new board back.
//!
//! # Routes
//!
//! - `POST /api/game/init` and `POST /api/game/reset`: a fresh board
//! - `POST /api/game/move`: submit a [`MoveRequest`], receive a [`GameView`]
//! - `GET /health`: liveness
//!
//! # Example
//!
//! ```no_run
//! use noughts_server::{AppState, ServerConfig, router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default();
//! let app = router(AppState::from_config(&config));
//! let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod routes;
mod simulate;
mod wire;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ErrorBody};
pub use routes::{AppState, router};
pub use simulate::simulate;
pub use wire::{GameView, MoveRequest, WireBoard, parse_board, render_board, status_line};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber; `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
