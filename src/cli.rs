//! Terminal two-player loop: render the board, prompt for a column, repeat.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::board::Board;
use crate::common::Disc;
use crate::config::{COLUMNS, ROWS};
use crate::game::{Game, GameStatus};
use crate::player::Player;

/// Render the grid as text: a column-index header row, then one line per
/// board row, top row first.
pub fn format_board(board: &Board) -> String {
    let mut out = String::new();
    for col in 0..COLUMNS {
        let _ = write!(out, "{} ", col);
    }
    out.push('\n');
    for row in 0..ROWS {
        for col in 0..COLUMNS {
            let _ = write!(out, "{} ", board.get(row, col).as_char());
        }
        out.push('\n');
    }
    out
}

/// Parse a 0-indexed column number from a line of terminal input.
pub fn parse_column(input: &str) -> Option<usize> {
    input.trim().parse().ok()
}

/// Run a full two-player game on stdin/stdout. Blocks on terminal input;
/// returns when the game is decided or stdin closes.
pub fn run() -> anyhow::Result<()> {
    let first = Disc::Red;
    let players = [
        Player::new("Player X", first),
        Player::new("Player O", first.other()),
    ];
    let mut game = Game::new(players);

    loop {
        println!("\nCurrent board:");
        println!("{}", format_board(game.board()));
        print!(
            "Player {}'s turn. Choose a column (0 to {}): ",
            game.current_player().disc().mark_char(),
            COLUMNS - 1
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            // stdin closed; abandon the game
            println!();
            return Ok(());
        }
        let column = match parse_column(&line) {
            Some(column) => column,
            None => {
                println!("Invalid input. Enter a column number.");
                continue;
            }
        };

        match game.play(column) {
            Ok(GameStatus::InProgress) => {}
            Ok(GameStatus::Won(disc)) => {
                println!("\nCurrent board:");
                println!("{}", format_board(game.board()));
                println!("Player {} wins!", disc.mark_char());
                return Ok(());
            }
            Ok(GameStatus::Draw) => {
                println!("\nCurrent board:");
                println!("{}", format_board(game.board()));
                println!("It's a draw!");
                return Ok(());
            }
            Err(e) => println!("{}", e),
        }
    }
}
