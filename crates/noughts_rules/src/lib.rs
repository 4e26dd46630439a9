//! Noughts rules - a pure tic-tac-toe rules engine.
//!
//! # Architecture
//!
//! - **Rules**: [`detect_outcome`] and [`apply_move`] over immutable [`Board`] values
//! - **Resolution**: [`resolve_move`] validates a submitted move and, against the
//!   computer, answers it with an [`OpponentPolicy`] pick
//! - **Records**: [`GameStats`] and [`Settings`] the presentation layer persists
//!
//! # Example
//!
//! ```
//! use noughts_rules::{Board, Mode, Move, Outcome, resolve_human_move};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let res = resolve_human_move(&Board::new(), Move::new(1, 1), Mode::Ai, &mut rng)?;
//! assert_eq!(*res.outcome(), Outcome::InProgress);
//! assert!(res.opponent_move().is_some());
//! # Ok::<(), noughts_rules::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod opponent;
mod records;
mod resolution;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use opponent::{OpponentPolicy, UniformRandom};
pub use records::{Difficulty, GameResult, GameStats, Settings};
pub use resolution::{Mode, Resolution, resolve_human_move, resolve_move, resolve_opponent_move};
pub use rules::{apply_move, detect_outcome, winning_line};
pub use types::{Board, Cell, Mark, Outcome, SIZE};
