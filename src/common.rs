//! Common types for Puissance 4: cell and disc marks, move errors.

/// One cell of the board grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// No disc has reached this cell yet.
    Empty,
    /// A red disc ("X" in the terminal).
    Red,
    /// A yellow disc ("O" in the terminal).
    Yellow,
}

impl Cell {
    /// Terminal mark for this cell.
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'X',
            Cell::Yellow => 'O',
        }
    }
}

/// A player's disc color, the mark identifying their pieces on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disc {
    Red,
    Yellow,
}

impl Disc {
    /// The opposing disc.
    pub fn other(self) -> Disc {
        match self {
            Disc::Red => Disc::Yellow,
            Disc::Yellow => Disc::Red,
        }
    }

    /// Cell value occupied by this disc.
    pub fn cell(self) -> Cell {
        match self {
            Disc::Red => Cell::Red,
            Disc::Yellow => Cell::Yellow,
        }
    }

    /// Terminal mark for this disc.
    pub fn mark_char(self) -> char {
        self.cell().as_char()
    }

    /// Lowercase color name used in form values and CSS classes.
    pub fn as_str(self) -> &'static str {
        match self {
            Disc::Red => "red",
            Disc::Yellow => "yellow",
        }
    }

    /// Parse one of the two accepted form values. Returns `None` for anything
    /// else; the web layer treats that as a user error.
    pub fn from_form_value(value: &str) -> Option<Disc> {
        match value {
            "red" => Some(Disc::Red),
            "yellow" => Some(Disc::Yellow),
            _ => None,
        }
    }
}

impl core::fmt::Display for Disc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Disc::Red => write!(f, "Red"),
            Disc::Yellow => write!(f, "Yellow"),
        }
    }
}

/// Rejection signals for a drop attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Column index is outside the board.
    InvalidColumn,
    /// Column has no empty cell left.
    ColumnFull,
    /// The game already ended; no further moves are accepted.
    GameOver,
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::InvalidColumn => write!(f, "column is out of range"),
            MoveError::ColumnFull => write!(f, "column is already full"),
            MoveError::GameOver => write!(f, "game is already over"),
        }
    }
}
