//! Stateless move resolution.
//!
//! Each call receives the complete board, validates and applies one move,
//! and in AI mode answers it with an opponent move. Nothing is remembered
//! between calls; the caller owns the game.

use crate::action::{Move, MoveError};
use crate::opponent::{OpponentPolicy, UniformRandom};
use crate::rules::{apply_move, detect_outcome};
use crate::types::{Board, Mark, Outcome};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who plays O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// The service answers every human move with an opponent move.
    #[default]
    Ai,
    /// Two people share the board; the service never moves on its own.
    Human,
}

/// The board and outcome after one resolution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Resolution {
    /// Board after every move in this step.
    board: Board,
    /// Outcome of `board`.
    outcome: Outcome,
    /// The opponent's reply, when one was made.
    opponent_move: Option<Move>,
}

impl Resolution {
    fn settled(board: Board) -> Self {
        Self {
            outcome: detect_outcome(&board),
            board,
            opponent_move: None,
        }
    }
}

/// Resolves a move by the human player, who always plays X.
///
/// In [`Mode::Ai`] a still-running game is answered by the opponent; in
/// [`Mode::Human`] the board is returned after X's move alone.
///
/// # Errors
///
/// Propagates every [`MoveError`] from [`resolve_move`].
#[instrument(skip(board, rng), fields(%mv, %mode))]
pub fn resolve_human_move<R: Rng + ?Sized>(
    board: &Board,
    mv: Move,
    mode: Mode,
    rng: &mut R,
) -> Result<Resolution, MoveError> {
    resolve_move(board, mv, mode, Some(Mark::X), rng)
}

/// Resolves one submitted move.
///
/// `mark` defaults to the board's [`Board::to_move`]. In [`Mode::Ai`] only X
/// may be submitted.
///
/// # Errors
///
/// - [`MoveError::MalformedInput`] when the board's mark counts are unbalanced.
/// - [`MoveError::OutOfRange`], [`MoveError::GameAlreadyOver`] and
///   [`MoveError::IllegalMove`] from [`apply_move`].
/// - [`MoveError::OutOfTurn`] when `mark` is not due to play.
#[instrument(skip(board, rng), fields(%mv, %mode, ?mark))]
pub fn resolve_move<R: Rng + ?Sized>(
    board: &Board,
    mv: Move,
    mode: Mode,
    mark: Option<Mark>,
    rng: &mut R,
) -> Result<Resolution, MoveError> {
    board.check_balance()?;

    let mark = mark.unwrap_or_else(|| board.to_move());
    let placed = apply_move(board, mv, mark)?;

    if mark != board.to_move() || (mode == Mode::Ai && mark != Mark::X) {
        return Err(MoveError::OutOfTurn(mark));
    }

    let resolution = Resolution::settled(placed);
    debug!(outcome = %resolution.outcome, "Submitted move applied");

    if mode == Mode::Ai && !resolution.outcome.is_terminal() {
        return resolve_opponent_move(&placed, rng);
    }

    Ok(resolution)
}

/// Plays O on a random empty cell.
///
/// # Errors
///
/// Returns [`MoveError::GameAlreadyOver`] for a won board.
///
/// # Panics
///
/// Panics when the board has no empty cell. Such a board is already a draw
/// or a win and the caller should never have asked for a reply.
#[instrument(skip(board, rng))]
pub fn resolve_opponent_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<Resolution, MoveError> {
    let Some(reply) = UniformRandom.pick(board, rng) else {
        panic!("opponent asked to move on a board with no empty cells:\n{board}");
    };

    let placed = apply_move(board, reply, Mark::O)?;
    let resolution = Resolution {
        opponent_move: Some(reply),
        ..Resolution::settled(placed)
    };
    info!(%reply, outcome = %resolution.outcome, "Opponent replied");
    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const X: Cell = Cell::Occupied(Mark::X);
    const O: Cell = Cell::Occupied(Mark::O);
    const E: Cell = Cell::Empty;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(2024)
    }

    #[test]
    fn test_ai_mode_replies() {
        let res = resolve_human_move(&Board::new(), Move::new(1, 1), Mode::Ai, &mut rng()).unwrap();
        assert_eq!(res.board().count(Mark::X), 1);
        assert_eq!(res.board().count(Mark::O), 1);
        let reply = res.opponent_move().unwrap();
        assert_ne!(reply, Move::new(1, 1));
        assert_eq!(*res.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_human_mode_does_not_reply() {
        let res =
            resolve_human_move(&Board::new(), Move::new(0, 0), Mode::Human, &mut rng()).unwrap();
        assert_eq!(res.board().count(Mark::O), 0);
        assert_eq!(*res.opponent_move(), None);
    }

    #[test]
    fn test_human_mode_places_o_on_its_turn() {
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
        let res = resolve_move(&board, Move::new(2, 2), Mode::Human, None, &mut rng()).unwrap();
        assert_eq!(res.board().get(2, 2), Some(O));
    }

    #[test]
    fn test_winning_move_skips_reply() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        let res = resolve_human_move(&board, Move::new(0, 2), Mode::Ai, &mut rng()).unwrap();
        assert_eq!(*res.outcome(), Outcome::WinX);
        assert_eq!(*res.opponent_move(), None);
        assert_eq!(res.board().count(Mark::O), 2);
    }

    #[test]
    fn test_filling_last_cell_draws_without_reply() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, E]]);
        let res = resolve_human_move(&board, Move::new(2, 2), Mode::Ai, &mut rng()).unwrap();
        assert_eq!(*res.outcome(), Outcome::Draw);
        assert_eq!(*res.opponent_move(), None);
    }

    #[test]
    fn test_wrong_mark_in_human_mode() {
        let result = resolve_move(&Board::new(), Move::new(0, 0), Mode::Human, Some(Mark::O), &mut rng());
        assert_eq!(result, Err(MoveError::OutOfTurn(Mark::O)));
    }

    #[test]
    fn test_unbalanced_board_is_malformed() {
        let board = Board::from_rows([[O, O, E], [E, E, E], [E, E, E]]);
        let result = resolve_human_move(&board, Move::new(2, 2), Mode::Ai, &mut rng());
        assert!(matches!(result, Err(MoveError::MalformedInput(_))));
    }

    #[test]
    fn test_errors_propagate_unchanged() {
        let board = Board::from_rows([[X, O, E], [E, E, E], [E, E, E]]);
        assert_eq!(
            resolve_human_move(&board, Move::new(0, 1), Mode::Ai, &mut rng()),
            Err(MoveError::IllegalMove(Move::new(0, 1)))
        );
        assert_eq!(
            resolve_human_move(&board, Move::new(-1, 1), Mode::Ai, &mut rng()),
            Err(MoveError::OutOfRange(Move::new(-1, 1)))
        );
    }

    #[test]
    #[should_panic(expected = "no empty cells")]
    fn test_opponent_on_full_board_panics() {
        let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, O]]);
        let _ = resolve_opponent_move(&board, &mut rng());
    }

    #[test]
    fn test_opponent_on_won_board_with_space() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(
            resolve_opponent_move(&board, &mut rng()),
            Err(MoveError::GameAlreadyOver)
        );
    }

    #[test]
    fn test_mode_parses_from_lowercase() {
        assert_eq!("ai".parse::<Mode>().unwrap(), Mode::Ai);
        assert_eq!("human".parse::<Mode>().unwrap(), Mode::Human);
        assert!("robot".parse::<Mode>().is_err());
    }
}
