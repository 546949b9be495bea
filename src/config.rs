/// Number of board rows. Row 0 is the top, row `ROWS - 1` the bottom.
pub const ROWS: usize = 6;
/// Number of board columns, addressed 0-based throughout the core.
pub const COLUMNS: usize = 7;
/// Run length that wins the game.
pub const CONNECT: usize = 4;

/// Shortest accepted player name (web variant form validation).
pub const NAME_MIN_LEN: usize = 3;
/// Longest accepted player name.
pub const NAME_MAX_LEN: usize = 20;
