//! Self-play check: a random X against the built-in opponent.

use noughts_rules::{
    Board, GameResult, GameStats, Mode, MoveError, OpponentPolicy, Outcome, UniformRandom,
    resolve_human_move,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

/// Plays `games` complete games through the resolution service and tallies
/// them from X's side.
///
/// # Errors
///
/// Any [`MoveError`] means the engine refused a move it had itself offered
/// as legal, which is a bug worth surfacing.
#[instrument]
pub fn simulate(games: u32, seed: u64) -> Result<GameStats, MoveError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut stats = GameStats::new();

    for game in 0..games {
        let mut board = Board::new();
        let mut outcome = Outcome::InProgress;
        while !outcome.is_terminal() {
            let Some(mv) = UniformRandom.pick(&board, &mut rng) else {
                break;
            };
            let resolution = resolve_human_move(&board, mv, Mode::Ai, &mut rng)?;
            board = *resolution.board();
            outcome = *resolution.outcome();
        }

        if let Some(result) = GameResult::from_outcome(outcome) {
            debug!(game, %result, "Game finished");
            stats.record(result);
        }
    }

    info!(
        wins = stats.wins(),
        losses = stats.losses(),
        draws = stats.draws(),
        "Simulation complete"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_game_is_counted() {
        let stats = simulate(200, 11).unwrap();
        assert_eq!(*stats.total_games(), 200);
        assert_eq!(stats.wins() + stats.losses() + stats.draws(), 200);
    }

    #[test]
    fn test_seed_reproduces_tally() {
        assert_eq!(simulate(50, 5).unwrap(), simulate(50, 5).unwrap());
    }

    #[test]
    fn test_random_x_wins_most_against_random_o() {
        // Moving first is a real edge when both sides play at random.
        let stats = simulate(2000, 1).unwrap();
        assert!(stats.wins() > stats.losses());
    }
}
