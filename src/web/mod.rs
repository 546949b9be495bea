//! Server-rendered web variant: session state, routes, page plumbing.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;

use crate::game::Game;
use crate::scoreboard::Scoreboard;

pub mod assets;
pub mod handlers;
pub mod pages;

/// Shared application state: the single current game plus the scoreboard.
///
/// There is one implicit player session per process. The mutexes serialize
/// access from concurrent requests, but multiple browser tabs still share and
/// overwrite the same game. Multi-session play is out of scope.
pub struct AppState {
    /// Current game, `None` until the first init.
    pub game: Mutex<Option<Game>>,
    /// Records of finished games, oldest first.
    pub scoreboard: Mutex<Scoreboard>,
    /// Directory served verbatim under `/static/`.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Fresh state with no game in progress and an empty scoreboard.
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        AppState {
            game: Mutex::new(None),
            scoreboard: Mutex::new(Scoreboard::new()),
            static_dir: static_dir.into(),
        }
    }
}

/// Create the HTTP router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/game/init", get(handlers::init_form))
        .route("/game/init/traitement", post(handlers::init_submit))
        .route("/game/play", get(handlers::play_page))
        .route("/game/play/traitement", post(handlers::play_submit))
        .route("/game/end", get(handlers::end_page))
        .route("/game/scoreboard", get(handlers::scoreboard_page))
        .route("/error", get(handlers::error_page))
        .route("/static/*path", get(assets::serve_static))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind: &str, static_dir: impl Into<PathBuf>) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(static_dir));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    log::info!("serving on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
