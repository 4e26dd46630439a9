//! Moves and the errors a move can produce.

use crate::types::{Mark, SIZE};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move: the `(row, col)` a mark is placed at.
///
/// Coordinates are signed so a caller's negative input is reported as
/// [`MoveError::OutOfRange`] instead of failing to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Row, 0 at the top.
    pub row: i64,
    /// Column, 0 at the left.
    pub col: i64,
}

impl Move {
    /// Builds the move for a row-major cell index (0-8).
    pub(crate) fn from_index(index: usize) -> Self {
        Self {
            row: (index / SIZE) as i64,
            col: (index % SIZE) as i64,
        }
    }

    /// Returns `(row, col)` as grid indices when both lie in `[0, 2]`.
    pub fn coords(self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok().filter(|r| *r < SIZE)?;
        let col = usize::try_from(self.col).ok().filter(|c| *c < SIZE)?;
        Some((row, col))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Why a move was refused.
///
/// Each variant is a distinct, recoverable condition the caller can branch
/// on; none of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Move {} is outside the board", _0)]
    OutOfRange(Move),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    IllegalMove(Move),

    /// The board already has a winner or is a draw.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The board could not have come from legal play.
    #[display("Malformed input: {}", _0)]
    MalformedInput(String),

    /// The mark is not the one due to play on this board.
    #[display("It's not {}'s turn", _0)]
    OutOfTurn(Mark),
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Stable machine-readable name for this kind of error.
    pub fn kind(&self) -> &'static str {
        match self {
            MoveError::OutOfRange(_) => "out_of_range",
            MoveError::IllegalMove(_) => "illegal_move",
            MoveError::GameAlreadyOver => "game_already_over",
            MoveError::MalformedInput(_) => "malformed_input",
            MoveError::OutOfTurn(_) => "out_of_turn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_in_range() {
        assert_eq!(Move::new(0, 0).coords(), Some((0, 0)));
        assert_eq!(Move::new(2, 1).coords(), Some((2, 1)));
    }

    #[test]
    fn test_coords_out_of_range() {
        assert_eq!(Move::new(3, 0).coords(), None);
        assert_eq!(Move::new(0, -1).coords(), None);
        assert_eq!(Move::new(i64::MAX, 0).coords(), None);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Move::from_index(0), Move::new(0, 0));
        assert_eq!(Move::from_index(5), Move::new(1, 2));
        assert_eq!(Move::from_index(8), Move::new(2, 2));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::IllegalMove(Move::new(1, 1)).to_string(),
            "Cell (1, 1) is already occupied"
        );
        assert_eq!(MoveError::OutOfTurn(Mark::O).to_string(), "It's not O's turn");
    }
}
