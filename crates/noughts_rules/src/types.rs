//! Core domain types for the rules engine.

use crate::action::{Move, MoveError};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Side length of the grid.
pub const SIZE: usize = 3;

/// A mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Occupied(mark)
    }
}

/// 3x3 board, stored row-major.
///
/// Boards are values. Every transformation in this crate takes a board by
/// reference and hands back a fresh one, so a reader holding the original
/// never sees a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from three rows of cells.
    pub fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Self {
        let mut cells = [Cell::Empty; SIZE * SIZE];
        for (row, line) in rows.iter().enumerate() {
            cells[row * SIZE..(row + 1) * SIZE].copy_from_slice(line);
        }
        Self { cells }
    }

    /// Returns the board as three rows of cells.
    pub fn rows(&self) -> [[Cell; SIZE]; SIZE] {
        let mut rows = [[Cell::Empty; SIZE]; SIZE];
        for (row, line) in rows.iter_mut().enumerate() {
            line.copy_from_slice(&self.cells[row * SIZE..(row + 1) * SIZE]);
        }
        rows
    }

    /// Gets the cell at `(row, col)`, or `None` when off the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= SIZE || col >= SIZE {
            return None;
        }
        Some(self.cells[row * SIZE + col])
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; SIZE * SIZE] {
        &self.cells
    }

    /// Returns a copy of this board with `(row, col)` set to `cell`.
    ///
    /// Coordinates must already be on the grid.
    pub(crate) fn with_cell(mut self, row: usize, col: usize, cell: Cell) -> Self {
        self.cells[row * SIZE + col] = cell;
        self
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| Move::from_index(idx))
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// The mark due to play next: X when the counts tie, otherwise O.
    pub fn to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Verifies that X leads O by zero or one mark.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::MalformedInput`] when the counts could not have
    /// come from alternating play starting with X.
    #[instrument(skip(self))]
    pub fn check_balance(&self) -> Result<(), MoveError> {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        if x == o || x == o + 1 {
            Ok(())
        } else {
            warn!(x, o, "Board mark counts are unbalanced");
            Err(MoveError::MalformedInput(format!(
                "board has {x} X marks and {o} O marks"
            )))
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, line) in self.rows().iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(Mark::X) => 'X',
                    Cell::Occupied(Mark::O) => 'O',
                };
                write!(f, "{symbol}")?;
                if col < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Terminal or non-terminal classification of a board.
///
/// Always derived from board contents, never stored alongside a board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// Moves remain and nobody has a line.
    InProgress,
    /// X completed a line.
    WinX,
    /// O completed a line.
    WinO,
    /// Board full, no line.
    Draw,
}

impl Outcome {
    /// True for every outcome except [`Outcome::InProgress`].
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// The winning mark, if the game was won.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::WinX => Some(Mark::X),
            Outcome::WinO => Some(Mark::O),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// The win outcome for `mark`.
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::X => Outcome::WinX,
            Mark::O => Outcome::WinO,
        }
    }
}
