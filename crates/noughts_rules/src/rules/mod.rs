//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values. Nothing here holds state between
//! calls, so every result is reproducible from its inputs alone.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, check_winner, winning_line};

use crate::action::{Move, MoveError};
use crate::types::{Board, Cell, Mark, Outcome};
use tracing::{debug, instrument};

/// Classifies a board.
///
/// A completed line wins (first line in scan order on malformed boards),
/// a full board without one is a draw, anything else is in progress.
#[instrument]
pub fn detect_outcome(board: &Board) -> Outcome {
    if let Some((mark, _)) = check_winner(board) {
        return Outcome::win_for(mark);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

/// Places `mark` at `mv`, returning a new board.
///
/// The input board is never modified.
///
/// # Errors
///
/// - [`MoveError::OutOfRange`] when either coordinate is outside `[0, 2]`,
///   whatever the board holds.
/// - [`MoveError::GameAlreadyOver`] when the board is already won or drawn.
/// - [`MoveError::IllegalMove`] when the cell is occupied.
#[instrument(skip_all, fields(row = mv.row, col = mv.col, %mark))]
pub fn apply_move(board: &Board, mv: Move, mark: Mark) -> Result<Board, MoveError> {
    let (row, col) = mv.coords().ok_or(MoveError::OutOfRange(mv))?;

    if detect_outcome(board).is_terminal() {
        return Err(MoveError::GameAlreadyOver);
    }

    if board.get(row, col) != Some(Cell::Empty) {
        return Err(MoveError::IllegalMove(mv));
    }

    debug!(row, col, "Placing mark");
    Ok(board.with_cell(row, col, Cell::Occupied(mark)))
}
