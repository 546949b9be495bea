//! Board state and the win/draw scans.

use crate::common::{Cell, Disc, MoveError};
use crate::config::{COLUMNS, CONNECT, ROWS};

/// The 6×7 grid. Row 0 is the top row, row 5 the bottom.
///
/// Gravity invariant: an occupied cell never sits above an empty cell in the
/// same column, because discs are only ever placed in the lowest empty row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLUMNS]; ROWS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLUMNS]; ROWS],
        }
    }

    /// Cell at (row, column). Row 0 is the top.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Whether a column has no empty cell left. Out-of-range columns count as
    /// full: nothing can be dropped there.
    pub fn is_column_full(&self, column: usize) -> bool {
        column >= COLUMNS || self.cells[0][column] != Cell::Empty
    }

    /// Drop a disc into a column. On success the disc settles in the lowest
    /// empty row and that row index is returned. A rejected drop leaves the
    /// board untouched.
    pub fn drop_disc(&mut self, column: usize, disc: Disc) -> Result<usize, MoveError> {
        if column >= COLUMNS {
            return Err(MoveError::InvalidColumn);
        }
        let row = (0..ROWS)
            .rev()
            .find(|&r| self.cells[r][column] == Cell::Empty)
            .ok_or(MoveError::ColumnFull)?;
        self.cells[row][column] = disc.cell();
        Ok(row)
    }

    /// Whether the board is completely full. Gravity makes the top row the
    /// sentinel: a full column has no empty cell below its top either.
    pub fn is_full(&self) -> bool {
        (0..COLUMNS).all(|c| self.cells[0][c] != Cell::Empty)
    }

    /// Scan for four-in-a-row of the given disc across rows, columns and both
    /// diagonals. Only the mark just played needs checking; the opponent
    /// cannot have completed a line on someone else's move.
    pub fn has_connect_four(&self, disc: Disc) -> bool {
        self.row_win(disc) || self.column_win(disc) || self.diagonal_win(disc)
    }

    fn row_win(&self, disc: Disc) -> bool {
        let mark = disc.cell();
        for row in 0..ROWS {
            let mut run = 0;
            for col in 0..COLUMNS {
                if self.cells[row][col] == mark {
                    run += 1;
                    if run >= CONNECT {
                        return true;
                    }
                } else {
                    run = 0;
                }
            }
        }
        false
    }

    fn column_win(&self, disc: Disc) -> bool {
        let mark = disc.cell();
        for col in 0..COLUMNS {
            let mut run = 0;
            for row in 0..ROWS {
                if self.cells[row][col] == mark {
                    run += 1;
                    if run >= CONNECT {
                        return true;
                    }
                } else {
                    run = 0;
                }
            }
        }
        false
    }

    /// Fixed four-cell windows, anchors bounded so every index stays on the
    /// board: descending (↘) then ascending (↗).
    fn diagonal_win(&self, disc: Disc) -> bool {
        let mark = disc.cell();
        for row in 0..=(ROWS - CONNECT) {
            for col in 0..=(COLUMNS - CONNECT) {
                if (0..CONNECT).all(|i| self.cells[row + i][col + i] == mark) {
                    return true;
                }
            }
        }
        for row in (CONNECT - 1)..ROWS {
            for col in 0..=(COLUMNS - CONNECT) {
                if (0..CONNECT).all(|i| self.cells[row - i][col + i] == mark) {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
