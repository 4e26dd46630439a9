//! Statistical tests for opponent move selection.

use noughts_rules::{Board, Cell, Mark, Move, Outcome, resolve_opponent_move};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

const X: Cell = Cell::Occupied(Mark::X);
const O: Cell = Cell::Occupied(Mark::O);
const E: Cell = Cell::Empty;

const TRIALS: usize = 10_000;

#[test]
fn test_three_empty_cells_chosen_uniformly() {
    // Three X, three O, no line, bottom row open.
    let board = Board::from_rows([[X, O, X], [X, O, O], [E, E, E]]);
    assert_eq!(board.empty_cells().len(), 3);

    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let mut counts: HashMap<Move, usize> = HashMap::new();
    for _ in 0..TRIALS {
        let res = resolve_opponent_move(&board, &mut rng).expect("board is in progress");
        let reply = res.opponent_move().expect("opponent always replies");
        *counts.entry(reply).or_default() += 1;
    }

    assert_eq!(counts.len(), 3);
    let expected = TRIALS as f64 / 3.0;
    // About five standard deviations of a binomial(10000, 1/3).
    let tolerance = 250.0;
    for cell in board.empty_cells() {
        let seen = counts.get(&cell).copied().unwrap_or(0) as f64;
        assert!(
            (seen - expected).abs() < tolerance,
            "cell {cell} chosen {seen} times, expected about {expected:.0}"
        );
    }
}

#[test]
fn test_reply_only_ever_lands_on_empty_cells() {
    let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..500 {
        let res = resolve_opponent_move(&board, &mut rng).unwrap();
        let reply = res.opponent_move().unwrap();
        assert_ne!(reply, Move::new(0, 0));
        assert_eq!(res.board().count(Mark::O), 1);
        assert_eq!(*res.outcome(), Outcome::InProgress);
    }
}

#[test]
fn test_same_seed_same_reply() {
    let board = Board::new();
    let a = resolve_opponent_move(&board, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();
    let b = resolve_opponent_move(&board, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();
    assert_eq!(a, b);
}
