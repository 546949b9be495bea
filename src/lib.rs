mod board;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod scoreboard;

pub mod cli;
pub mod web;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use scoreboard::*;
