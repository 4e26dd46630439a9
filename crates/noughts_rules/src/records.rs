//! Records the presentation layer keeps between games.
//!
//! The engine never reads these back. They live here so every front end
//! tallies results and stores preferences the same way.

use crate::types::Outcome;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Opaque difficulty label chosen by the player.
///
/// Accepted and echoed back, never interpreted: the opponent plays the same
/// way whatever the label says.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct Difficulty(String);

impl Difficulty {
    /// The label as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self("medium".to_string())
    }
}

impl From<&str> for Difficulty {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

/// Player preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    sound_enabled: bool,
    music_enabled: bool,
    /// Percent, 0-100.
    volume: u8,
    difficulty: Difficulty,
    animations: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_enabled: true,
            volume: 75,
            difficulty: Difficulty::default(),
            animations: true,
        }
    }
}

impl Settings {
    /// Sets the volume, capped at 100.
    pub fn with_volume(mut self, volume: u8) -> Self {
        self.volume = volume.min(100);
        self
    }

    /// Sets the difficulty label.
    pub fn with_difficulty(mut self, difficulty: impl Into<Difficulty>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    /// Turns sound effects on or off.
    pub fn with_sound(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    /// Turns music on or off.
    pub fn with_music(mut self, enabled: bool) -> Self {
        self.music_enabled = enabled;
        self
    }

    /// Turns board animations on or off.
    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.animations = enabled;
        self
    }
}

/// A finished game from the human (X) player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameResult {
    /// X won.
    Win,
    /// O won.
    Loss,
    /// Nobody won.
    Draw,
}

impl GameResult {
    /// Maps a terminal outcome to a result; `None` while the game runs.
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Draw => Some(GameResult::Draw),
            Outcome::WinX => Some(GameResult::Win),
            Outcome::WinO => Some(GameResult::Loss),
        }
    }
}

/// Cumulative win/loss/draw counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
#[serde(default, rename_all = "camelCase")]
pub struct GameStats {
    wins: u32,
    losses: u32,
    draws: u32,
    /// Consecutive wins; reset by a loss, kept through a draw.
    streak: u32,
    total_games: u32,
    best_streak: u32,
}

impl GameStats {
    /// Creates empty counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, result: GameResult) {
        self.total_games += 1;
        match result {
            GameResult::Win => {
                self.wins += 1;
                self.streak += 1;
                self.best_streak = self.best_streak.max(self.streak);
            }
            GameResult::Loss => {
                self.losses += 1;
                self.streak = 0;
            }
            GameResult::Draw => self.draws += 1,
        }
        debug!(stats = ?self, "Stats updated");
    }

    /// Clears every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
