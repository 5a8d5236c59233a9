//! Raw 6x7 grid storage and cell access.
//!
//! The board has no rules knowledge: it stores cells and enforces
//! gravity (a dropped token lands in the lowest empty row of its
//! column). Win and draw detection live in the engine.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Number of rows. Row 0 is the top, row 5 the bottom.
pub const ROWS: usize = 6;

/// Number of columns.
pub const COLS: usize = 7;

/// A single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    One,
    Two,
}

/// Fixed 6x7 Connect Four grid.
///
/// Invariant: within any column, occupied cells form a contiguous run
/// from the bottom row upward. Only gravity drops can add tokens, so a
/// violation indicates a bug in move application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a position.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Check whether a column's top row is occupied.
    #[must_use]
    pub fn is_column_full(&self, column: usize) -> bool {
        self.cells[0][column] != Cell::Empty
    }

    /// Check whether every column is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|column| self.is_column_full(column))
    }

    /// Drop a token into the lowest empty row of `column`.
    ///
    /// Returns the row the token landed in, or `None` if the column is
    /// full. The caller is responsible for bounds-checking `column`.
    pub fn drop_token(&mut self, column: usize, player: Player) -> Option<usize> {
        for row in (0..ROWS).rev() {
            if self.cells[row][column] == Cell::Empty {
                self.cells[row][column] = player.cell();
                return Some(row);
            }
        }
        None
    }

    /// Check the gravity invariant for one column: no empty cell below
    /// an occupied one.
    #[must_use]
    pub fn column_is_grounded(&self, column: usize) -> bool {
        let mut seen_token = false;
        for row in 0..ROWS {
            match self.cells[row][column] {
                Cell::Empty => {
                    if seen_token {
                        return false;
                    }
                }
                _ => seen_token = true,
            }
        }
        true
    }

    /// Count non-empty cells.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
