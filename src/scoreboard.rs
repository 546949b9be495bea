//! Completed-game records, kept in process memory for the web variant.

use chrono::{DateTime, Utc};

use crate::game::Game;

/// Immutable record of one finished game. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    player1: String,
    player2: String,
    winner: Option<String>,
    finished_at: DateTime<Utc>,
    turns: u32,
}

impl GameResult {
    /// Snapshot a finished game, stamped with the current UTC time. Returns
    /// `None` while the game is still in progress.
    pub fn from_game(game: &Game) -> Option<GameResult> {
        if !game.is_over() {
            return None;
        }
        Some(GameResult {
            player1: game.players()[0].name().to_string(),
            player2: game.players()[1].name().to_string(),
            winner: game.winner().map(|p| p.name().to_string()),
            finished_at: Utc::now(),
            turns: game.turns(),
        })
    }

    /// First seat's name.
    pub fn player1(&self) -> &str {
        &self.player1
    }

    /// Second seat's name.
    pub fn player2(&self) -> &str {
        &self.player2
    }

    /// Winner's name, or `None` for a draw.
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// When the game finished.
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    /// Total discs played, the winning move included.
    pub fn turns(&self) -> u32 {
        self.turns
    }
}

/// Append-only list of finished games, oldest first.
#[derive(Debug, Default)]
pub struct Scoreboard {
    entries: Vec<GameResult>,
}

impl Scoreboard {
    /// Empty scoreboard.
    pub fn new() -> Self {
        Scoreboard {
            entries: Vec::new(),
        }
    }

    /// Append a finished game's record.
    pub fn record(&mut self, result: GameResult) {
        self.entries.push(result);
    }

    /// Most recently recorded game.
    pub fn last(&self) -> Option<&GameResult> {
        self.entries.last()
    }

    /// All records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &GameResult> {
        self.entries.iter()
    }

    /// Number of finished games.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no game has finished yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
