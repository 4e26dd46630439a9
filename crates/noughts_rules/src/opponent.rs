//! Opponent move selection.

use crate::action::Move;
use crate::types::Board;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Chooses the non-human player's move.
///
/// The random source is passed in by the caller so that tests can seed it
/// and concurrent callers never share one.
pub trait OpponentPolicy {
    /// Picks a move among the board's empty cells, or `None` if it has none.
    fn pick<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Move>;
}

/// Picks any empty cell with equal probability.
///
/// This is the whole policy: there is no lookahead and no notion of
/// difficulty.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRandom;

impl OpponentPolicy for UniformRandom {
    #[instrument(skip(self, rng))]
    fn pick<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Move> {
        let empty = board.empty_cells();
        let choice = empty.choose(rng).copied();
        debug!(candidates = empty.len(), ?choice, "Opponent picked a cell");
        choice
    }
}
