//! HTML rendering: one shared layout and a small builder per page.
//!
//! Pages are plain strings assembled with `write!`; every user-supplied value
//! goes through [`escape_html`] first.

use std::fmt::Write as _;

use crate::common::{Cell, Disc};
use crate::config::{COLUMNS, ROWS};
use crate::game::{Game, GameStatus};
use crate::scoreboard::GameResult;

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>{title} - Puissance 4</title>\n",
            "<link rel=\"stylesheet\" href=\"/static/style.css\">\n",
            "</head>\n",
            "<body>\n",
            "<header><h1><a href=\"/\">Puissance 4</a></h1></header>\n",
            "<main>\n{body}</main>\n",
            "</body>\n",
            "</html>\n",
        ),
        title = escape_html(title),
        body = body,
    )
}

fn board_html(game: &Game) -> String {
    let mut out = String::from("<table class=\"board\">\n");
    for row in 0..ROWS {
        out.push_str("<tr>");
        for col in 0..COLUMNS {
            let class = match game.board().get(row, col) {
                Cell::Empty => "empty",
                Cell::Red => "red",
                Cell::Yellow => "yellow",
            };
            let _ = write!(out, "<td class=\"cell {}\"></td>", class);
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
    out
}

/// Home page: entry points into the game and the scoreboard.
pub fn home() -> String {
    let body = concat!(
        "<p>Connect four discs in a row - horizontally, vertically or ",
        "diagonally - before your opponent does.</p>\n",
        "<ul>\n",
        "<li><a href=\"/game/init\">Start a new game</a></li>\n",
        "<li><a href=\"/game/scoreboard\">Scoreboard</a></li>\n",
        "</ul>\n",
    );
    layout("Home", body)
}

fn color_options(selected: Disc) -> String {
    let mut out = String::new();
    for disc in [Disc::Red, Disc::Yellow] {
        let _ = write!(
            out,
            "<option value=\"{}\"{}>{}</option>\n",
            disc.as_str(),
            if disc == selected { " selected" } else { "" },
            disc
        );
    }
    out
}

/// New-game form: two names, two colors restricted to red/yellow.
pub fn init_form() -> String {
    let body = format!(
        concat!(
            "<h2>New game</h2>\n",
            "<form method=\"post\" action=\"/game/init/traitement\">\n",
            "<fieldset>\n",
            "<legend>Player 1</legend>\n",
            "<label>Name <input type=\"text\" name=\"player1_name\" required></label>\n",
            "<label>Color <select name=\"player1_color\">\n{options1}</select></label>\n",
            "</fieldset>\n",
            "<fieldset>\n",
            "<legend>Player 2</legend>\n",
            "<label>Name <input type=\"text\" name=\"player2_name\" required></label>\n",
            "<label>Color <select name=\"player2_color\">\n{options2}</select></label>\n",
            "</fieldset>\n",
            "<p class=\"hint\">Names: 3 to 20 characters, letters, digits, - or _. ",
            "Colors must differ.</p>\n",
            "<button type=\"submit\">Start</button>\n",
            "</form>\n",
        ),
        options1 = color_options(Disc::Red),
        options2 = color_options(Disc::Yellow),
    );
    layout("New game", &body)
}

/// Play page: the board, plus one drop button per column while the game is
/// running, or the outcome with a link to the end page once it is decided.
pub fn play(game: &Game) -> String {
    let mut body = String::new();
    match game.status() {
        GameStatus::InProgress => {
            let player = game.current_player();
            let _ = write!(
                body,
                "<p class=\"turn\">Turn {}: <strong>{}</strong> ({})</p>\n",
                game.turns() + 1,
                escape_html(player.name()),
                player.disc()
            );
            body.push_str("<form method=\"post\" action=\"/game/play/traitement\" class=\"drop-row\">\n");
            for col in 1..=COLUMNS {
                let _ = write!(
                    body,
                    "<button type=\"submit\" name=\"column\" value=\"{}\" title=\"Drop in column {}\">&#8595;</button>",
                    col, col
                );
            }
            body.push_str("\n</form>\n");
        }
        GameStatus::Won(_) => {
            let winner = game.winner().map(|p| p.name()).unwrap_or("");
            let _ = write!(
                body,
                "<p class=\"outcome\"><strong>{}</strong> has won after {} turns. \
                 <a href=\"/game/end\">See the result</a></p>\n",
                escape_html(winner),
                game.turns()
            );
        }
        GameStatus::Draw => {
            let _ = write!(
                body,
                "<p class=\"outcome\">Draw after {} turns. \
                 <a href=\"/game/end\">See the result</a></p>\n",
                game.turns()
            );
        }
    }
    body.push_str(&board_html(game));
    layout("Play", &body)
}

/// 400 body for `GET /game/play` when no game has been initialized.
pub fn no_game() -> String {
    let body = concat!(
        "<p class=\"error\">No game in progress.</p>\n",
        "<p><a href=\"/game/init\">Start a new game</a></p>\n",
    );
    layout("No game", body)
}

/// End page: the last finished game's record.
pub fn end(result: &GameResult) -> String {
    let mut body = String::from("<h2>Game over</h2>\n");
    match result.winner() {
        Some(winner) => {
            let _ = write!(
                body,
                "<p class=\"outcome\"><strong>{}</strong> beat {} in {} turns.</p>\n",
                escape_html(winner),
                escape_html(other_player(result, winner)),
                result.turns()
            );
        }
        None => {
            let _ = write!(
                body,
                "<p class=\"outcome\">{} and {} played to a draw in {} turns.</p>\n",
                escape_html(result.player1()),
                escape_html(result.player2()),
                result.turns()
            );
        }
    }
    let _ = write!(
        body,
        "<p class=\"finished\">Finished at {}.</p>\n",
        result.finished_at().format("%Y-%m-%d %H:%M UTC")
    );
    body.push_str("<p><a href=\"/game/init\">Play again</a> - <a href=\"/game/scoreboard\">Scoreboard</a></p>\n");
    layout("Game over", &body)
}

fn other_player<'a>(result: &'a GameResult, winner: &str) -> &'a str {
    if result.player1() == winner {
        result.player2()
    } else {
        result.player1()
    }
}

/// Scoreboard page: every finished game, oldest first.
pub fn scoreboard(entries: &[GameResult]) -> String {
    let mut body = String::from("<h2>Scoreboard</h2>\n");
    if entries.is_empty() {
        body.push_str("<p>No games finished yet.</p>\n");
    } else {
        body.push_str(concat!(
            "<table class=\"scoreboard\">\n",
            "<tr><th>Players</th><th>Winner</th><th>Turns</th><th>Finished</th></tr>\n",
        ));
        for entry in entries {
            let _ = write!(
                body,
                "<tr><td>{} vs {}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(entry.player1()),
                escape_html(entry.player2()),
                entry
                    .winner()
                    .map(escape_html)
                    .unwrap_or_else(|| "Draw".to_string()),
                entry.turns(),
                entry.finished_at().format("%Y-%m-%d %H:%M UTC")
            );
        }
        body.push_str("</table>\n");
    }
    body.push_str("<p><a href=\"/game/init\">Start a new game</a></p>\n");
    layout("Scoreboard", &body)
}

/// Error page: the code/message pair from the query string.
pub fn error(code: &str, msg: &str) -> String {
    let body = format!(
        "<p class=\"error\">Error {}: {}</p>\n<p><a href=\"/\">Back to home</a></p>\n",
        escape_html(code),
        escape_html(msg)
    );
    layout("Error", &body)
}

/// Generic 500 body; the cause is in the server log, not the page.
pub fn internal_error() -> String {
    let body = concat!(
        "<p class=\"error\">Something went wrong on our side.</p>\n",
        "<p><a href=\"/\">Back to home</a></p>\n",
    );
    layout("Error", body)
}
