//! HTTP routes.
//!
//! Every handler is stateless with respect to games: the board arrives in
//! the request and leaves in the response.

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::wire::{GameView, MoveRequest, parse_board};
use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::Request;
use axum::routing::{get, post};
use axum::{Json, Router};
use noughts_rules::{Difficulty, resolve_move};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument};

/// Shared, read-only handler state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    seed: Option<u64>,
}

impl AppState {
    /// State drawing opponent moves from fresh entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose opponent replays the sequence for `seed` on every request.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Builds the state described by a config.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            seed: *config.seed(),
        }
    }

    /// A generator owned by one request.
    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/game/init", post(init_game))
        .route("/api/game/move", post(submit_move))
        .route("/api/game/reset", post(reset_game))
        .route("/health", get(health))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(state)
}

fn log_request(req: Request<Body>) -> Request<Body> {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

/// Starts a game: an empty board with X to move.
#[instrument]
async fn init_game() -> Json<GameView> {
    info!("New game initialized");
    Json(GameView::fresh(Difficulty::default()))
}

/// Same as init; the server keeps nothing to clear.
#[instrument]
async fn reset_game() -> Json<GameView> {
    info!("Game reset");
    Json(GameView::fresh(Difficulty::default()))
}

/// Validates and resolves one submitted move.
#[instrument(skip_all)]
async fn submit_move(
    State(state): State<AppState>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<GameView>, ApiError> {
    let Json(req) = payload?;
    debug!(
        row = req.row(),
        col = req.col(),
        mode = %req.mode(),
        mark = ?req.mark(),
        "Processing move"
    );

    let board = parse_board(req.board())?;
    let mut rng = state.rng();
    let resolution = resolve_move(&board, req.target(), *req.mode(), *req.mark(), &mut rng)?;

    let difficulty = req.difficulty().clone().unwrap_or_default();
    let view = GameView::resolved(&resolution, *req.mode(), difficulty);
    info!(
        outcome = %view.outcome(),
        opponent_move = ?view.opponent_move(),
        "Move resolved"
    );
    Ok(Json(view))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Tic-tac-toe service is running",
    }))
}
