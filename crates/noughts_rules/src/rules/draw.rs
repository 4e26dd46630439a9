//! Draw detection.

use super::win::check_winner;
use crate::types::Board;
use tracing::instrument;

/// A draw is a full board on which no line is complete.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Mark};

    const X: Cell = Cell::Occupied(Mark::X);
    const O: Cell = Cell::Occupied(Mark::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, E]]);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_without_line() {
        let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, O]]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = Board::from_rows([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(!is_draw(&board));
    }
}
