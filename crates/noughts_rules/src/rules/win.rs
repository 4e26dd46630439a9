//! Line detection.

use crate::action::Move;
use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// The eight winning lines as `(row, col)` triples, in scan order:
/// rows top to bottom, columns left to right, then both diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Finds the first completed line in scan order.
///
/// Within a line X is tested before O. On a board where both marks hold a
/// line (unreachable in legal play) the earlier line wins.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Mark, [Move; 3])> {
    for line in LINES {
        for mark in [Mark::X, Mark::O] {
            let held = line
                .iter()
                .all(|&(row, col)| board.get(row, col) == Some(Cell::Occupied(mark)));
            if held {
                let cells = line.map(|(row, col)| Move::new(row as i64, col as i64));
                return Some((mark, cells));
            }
        }
    }
    None
}

/// The cells of the first completed line, for highlighting.
pub fn winning_line(board: &Board) -> Option<[Move; 3]> {
    check_winner(board).map(|(_, cells)| cells)
}
