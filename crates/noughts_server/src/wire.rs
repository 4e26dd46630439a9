//! JSON shapes exchanged with the presentation layer.
//!
//! The board travels as three rows of strings (`""`, `"X"` or `"O"`), the
//! shape the browser client already keeps. Nothing from the wire reaches the
//! rules engine until [`parse_board`] has checked it.

use derive_getters::Getters;
use noughts_rules::{
    Board, Cell, Difficulty, Mark, Mode, Move, MoveError, Outcome, Resolution, SIZE,
    detect_outcome, winning_line,
};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Board as sent over the wire.
pub type WireBoard = Vec<Vec<String>>;

/// Body of `POST /api/game/move`.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct MoveRequest {
    /// Board before the move.
    board: WireBoard,
    /// Target row (0-2).
    row: i64,
    /// Target column (0-2).
    col: i64,
    /// `ai` (default) or `human`.
    #[serde(default)]
    mode: Mode,
    /// Mark to place; defaults to whichever mark is due.
    #[serde(default)]
    mark: Option<Mark>,
    /// Difficulty label, echoed back untouched.
    #[serde(default)]
    difficulty: Option<Difficulty>,
}

impl MoveRequest {
    /// Creates a request in AI mode with no explicit mark.
    pub fn new(board: WireBoard, row: i64, col: i64) -> Self {
        Self {
            board,
            row,
            col,
            mode: Mode::Ai,
            mark: None,
            difficulty: None,
        }
    }

    /// Sets the mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the mark to place.
    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.mark = Some(mark);
        self
    }

    /// Sets the difficulty label.
    pub fn with_difficulty(mut self, difficulty: impl Into<Difficulty>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// The submitted move.
    pub fn target(&self) -> Move {
        Move::new(self.row, self.col)
    }
}

/// Everything the presentation layer needs to render a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Board after the request.
    board: WireBoard,
    /// Mark due to play next.
    player_turn: Mark,
    /// Outcome classification of `board`.
    outcome: Outcome,
    /// Short banner for the outcome; empty while the game runs.
    status: String,
    /// True once the outcome is terminal.
    game_over: bool,
    /// Cells of the completed line, empty unless someone won.
    winning_cells: Vec<Move>,
    /// The computer's reply, if it made one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    opponent_move: Option<Move>,
    /// Difficulty label from the request.
    difficulty: Difficulty,
}

impl GameView {
    /// View of a fresh game.
    pub fn fresh(difficulty: Difficulty) -> Self {
        Self::of_board(&Board::new(), Mode::Ai, None, difficulty)
    }

    /// View after a resolution step.
    pub fn resolved(resolution: &Resolution, mode: Mode, difficulty: Difficulty) -> Self {
        Self::of_board(
            resolution.board(),
            mode,
            *resolution.opponent_move(),
            difficulty,
        )
    }

    fn of_board(
        board: &Board,
        mode: Mode,
        opponent_move: Option<Move>,
        difficulty: Difficulty,
    ) -> Self {
        let outcome = detect_outcome(board);
        Self {
            board: render_board(board),
            player_turn: board.to_move(),
            outcome,
            status: status_line(outcome, mode),
            game_over: outcome.is_terminal(),
            winning_cells: winning_line(board).map(Vec::from).unwrap_or_default(),
            opponent_move,
            difficulty,
        }
    }
}

/// Banner text for an outcome, phrased for the mode being played.
pub fn status_line(outcome: Outcome, mode: Mode) -> String {
    match (outcome, mode) {
        (Outcome::InProgress, _) => String::new(),
        (Outcome::Draw, _) => "Draw!".to_string(),
        (Outcome::WinX, Mode::Ai) => "You win!".to_string(),
        (Outcome::WinO, Mode::Ai) => "AI wins!".to_string(),
        (Outcome::WinX, Mode::Human) => "Player X wins!".to_string(),
        (Outcome::WinO, Mode::Human) => "Player O wins!".to_string(),
    }
}

/// Checks the wire board's shape and converts it.
///
/// # Errors
///
/// [`MoveError::MalformedInput`] unless the board is exactly three rows of
/// three cells, each `""`, `"X"` or `"O"`.
#[instrument(skip(rows))]
pub fn parse_board(rows: &[Vec<String>]) -> Result<Board, MoveError> {
    if rows.len() != SIZE {
        warn!(rows = rows.len(), "Board has wrong number of rows");
        return Err(MoveError::MalformedInput(format!(
            "board must have {SIZE} rows, got {}",
            rows.len()
        )));
    }

    let mut grid = [[Cell::Empty; SIZE]; SIZE];
    for (r, row) in rows.iter().enumerate() {
        if row.len() != SIZE {
            warn!(row = r, cells = row.len(), "Board row has wrong length");
            return Err(MoveError::MalformedInput(format!(
                "row {r} must have {SIZE} cells, got {}",
                row.len()
            )));
        }
        for (c, value) in row.iter().enumerate() {
            grid[r][c] = parse_cell(value).ok_or_else(|| {
                MoveError::MalformedInput(format!("cell ({r}, {c}) holds {value:?}"))
            })?;
        }
    }

    Ok(Board::from_rows(grid))
}

fn parse_cell(value: &str) -> Option<Cell> {
    match value {
        "" => Some(Cell::Empty),
        "X" => Some(Cell::Occupied(Mark::X)),
        "O" => Some(Cell::Occupied(Mark::O)),
        _ => None,
    }
}

/// Converts a board to its wire shape.
pub fn render_board(board: &Board) -> WireBoard {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Empty => String::new(),
                    Cell::Occupied(mark) => mark.to_string(),
                })
                .collect()
        })
        .collect()
}
