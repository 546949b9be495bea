//! HTTP route handlers for the web variant.

use std::fmt::Write as _;
use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::common::{Disc, MoveError};
use crate::config::COLUMNS;
use crate::game::{Game, GameStatus};
use crate::player::{valid_name, Player};
use crate::scoreboard::GameResult;

use super::{pages, AppState};

/// Internal failures: logged, answered with a generic 500 page.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::error!("internal error: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(pages::internal_error()),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError(err.into())
    }
}

/// New-game form fields. Every field defaults so a missing field fails
/// validation like an empty one instead of tripping the extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct InitForm {
    #[serde(default)]
    pub player1_name: String,
    #[serde(default)]
    pub player2_name: String,
    #[serde(default)]
    pub player1_color: String,
    #[serde(default)]
    pub player2_color: String,
}

/// Drop form field: the column as submitted, 1-indexed.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayForm {
    #[serde(default)]
    pub column: String,
}

/// Code/message pair carried to `/error` via the query string.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorParams {
    pub code: Option<String>,
    pub msg: Option<String>,
}

/// 303 to `/error` carrying a code and a percent-encoded message.
fn error_redirect(code: u16, msg: &str) -> Redirect {
    Redirect::to(&format!("/error?code={}&msg={}", code, urlencode(msg)))
}

/// Minimal percent-encoding for query values: unreserved ASCII passes
/// through, everything else is `%`-escaped.
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                let _ = write!(out, "%{:02X}", byte);
            }
        }
    }
    out
}

/// `GET /` — home page.
pub async fn home() -> Html<String> {
    Html(pages::home())
}

/// `GET /game/init` — new-game form.
pub async fn init_form() -> Html<String> {
    Html(pages::init_form())
}

/// `POST /game/init/traitement` — validate the form and start a game.
///
/// Any validation failure redirects to `/error` and leaves the current game
/// untouched.
pub async fn init_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<InitForm>,
) -> Redirect {
    let name1 = form.player1_name.trim();
    let name2 = form.player2_name.trim();
    if !valid_name(name1) {
        return error_redirect(400, "player 1 name must be 3-20 letters, digits, - or _");
    }
    if !valid_name(name2) {
        return error_redirect(400, "player 2 name must be 3-20 letters, digits, - or _");
    }
    let color1 = match Disc::from_form_value(&form.player1_color) {
        Some(color) => color,
        None => return error_redirect(400, "unknown color for player 1"),
    };
    let color2 = match Disc::from_form_value(&form.player2_color) {
        Some(color) => color,
        None => return error_redirect(400, "unknown color for player 2"),
    };
    if color1 == color2 {
        return error_redirect(400, "players must choose two different colors");
    }

    let game = Game::new([Player::new(name1, color1), Player::new(name2, color2)]);
    log::info!(
        "new game: {} ({}) vs {} ({})",
        name1,
        color1,
        name2,
        color2
    );
    *state.game.lock().unwrap() = Some(game);
    Redirect::to("/game/play")
}

/// `GET /game/play` — render the current board; 400 when no game exists.
pub async fn play_page(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let game = state.game.lock().unwrap().clone();
    match game {
        Some(game) => Ok(Html(pages::play(&game))),
        None => Err((StatusCode::BAD_REQUEST, Html(pages::no_game()))),
    }
}

/// `POST /game/play/traitement` — drop a disc for the current player.
///
/// The form speaks 1-indexed columns; the core is 0-indexed. User errors
/// (bad column, full column, no game, game already over) redirect to
/// `/error`; a terminal move records the result and lands on `/game/end`.
pub async fn play_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PlayForm>,
) -> Redirect {
    let column = match form.column.trim().parse::<usize>() {
        Ok(c @ 1..=COLUMNS) => c - 1,
        _ => {
            return error_redirect(
                400,
                &format!("column must be a number between 1 and {}", COLUMNS),
            )
        }
    };

    let mut guard = state.game.lock().unwrap();
    let game = match guard.as_mut() {
        Some(game) => game,
        None => return error_redirect(400, "no game in progress"),
    };
    match game.play(column) {
        Ok(GameStatus::InProgress) => Redirect::to("/game/play"),
        Ok(_) => {
            if let Some(result) = GameResult::from_game(game) {
                match result.winner() {
                    Some(winner) => {
                        log::info!("game won by {} after {} turns", winner, result.turns())
                    }
                    None => log::info!("game drawn after {} turns", result.turns()),
                }
                state.scoreboard.lock().unwrap().record(result);
            }
            Redirect::to("/game/end")
        }
        Err(MoveError::GameOver) => error_redirect(409, "game already finished"),
        Err(e) => error_redirect(400, &e.to_string()),
    }
}

/// `GET /game/end` — the last finished game; error redirect when none yet.
pub async fn end_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, Redirect> {
    let last = state.scoreboard.lock().unwrap().last().cloned();
    match last {
        Some(result) => Ok(Html(pages::end(&result))),
        None => Err(error_redirect(404, "no finished game yet")),
    }
}

/// `GET /game/scoreboard` — every finished game, oldest first.
pub async fn scoreboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let entries: Vec<GameResult> = state.scoreboard.lock().unwrap().iter().cloned().collect();
    Html(pages::scoreboard(&entries))
}

/// `GET /error` — render the code/message pair from the query string.
pub async fn error_page(Query(params): Query<ErrorParams>) -> Html<String> {
    Html(pages::error(
        params.code.as_deref().unwrap_or("400"),
        params.msg.as_deref().unwrap_or("unknown error"),
    ))
}
