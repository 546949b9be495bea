use crate::board::Board;
use crate::common::{Disc, MoveError};
use crate::player::Player;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Disc),
    Draw,
}

/// Core game state: the board, both seats, whose turn it is, and how many
/// discs have been played.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: usize,
    turns: u32,
    status: GameStatus,
}

impl Game {
    /// Start a fresh game. Seat 0 moves first with an empty board.
    pub fn new(players: [Player; 2]) -> Self {
        Game {
            board: Board::new(),
            players,
            current: 0,
            turns: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both seats, in seating order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player whose move it is. After a win this stays on the winner; the
    /// loop never switched away from the seat that completed the line.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Number of discs successfully played so far, terminal move included.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Status after the latest move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game has been decided (win or draw).
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The winning player, if the game ended in a win.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(disc) => self.players.iter().find(|p| p.disc() == disc),
            _ => None,
        }
    }

    /// Drop the current player's disc into `column` and evaluate the move:
    /// four-in-a-row wins on the spot, a full board draws, anything else
    /// passes the turn to the other seat. Rejected drops change nothing.
    pub fn play(&mut self, column: usize) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let disc = self.players[self.current].disc();
        self.board.drop_disc(column, disc)?;
        self.turns += 1;

        if self.board.has_connect_four(disc) {
            self.status = GameStatus::Won(disc);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.switch_seat();
        }
        Ok(self.status)
    }

    fn switch_seat(&mut self) {
        self.current = 1 - self.current;
    }
}
