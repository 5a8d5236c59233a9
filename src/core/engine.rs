//! Rules engine: move application, win/draw detection, cheap cloning.
//!
//! The engine exclusively owns its [`Board`]; all other components act
//! through the methods here. A `clone()` is a full deep copy (the board
//! is a plain array), so simulations can mutate their clone freely.

use smallvec::SmallVec;

use super::board::{Board, Cell, COLS, ROWS};
use super::error::IllegalMove;
use super::player::Player;

/// The four line directions through a played cell, as (row, column)
/// steps: horizontal, vertical, diagonal down-right, diagonal up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Connect Four rules engine.
///
/// Tracks the board plus the winner/terminal flags. Mutated only by
/// [`GameEngine::apply_move`]; [`GameEngine::reset`] returns it to the
/// empty starting position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    winner: Option<Player>,
    over: bool,
}

impl GameEngine {
    /// Create an engine with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            winner: None,
            over: false,
        }
    }

    /// Reset to the empty starting position.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.winner = None;
        self.over = false;
    }

    /// Read-only board access for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Whether the game has ended (winner or full board).
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Whether the game ended with a full board and no winner.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none() && self.board.is_full()
    }

    /// Columns whose top row is empty.
    ///
    /// Does not consult the terminal flag; callers driving further moves
    /// must check [`GameEngine::is_over`] separately.
    #[must_use]
    pub fn legal_columns(&self) -> SmallVec<[usize; COLS]> {
        (0..COLS)
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    /// Apply `player`'s move in `column`, returning the row the token
    /// landed in.
    ///
    /// Fails with [`IllegalMove`] if the game is over, the column is out
    /// of range, or the column is full. Nothing is mutated on failure.
    pub fn apply_move(&mut self, player: Player, column: usize) -> Result<usize, IllegalMove> {
        if self.over {
            return Err(IllegalMove::GameOver);
        }
        if column >= COLS {
            return Err(IllegalMove::OutOfRange(column));
        }

        let row = self
            .board
            .drop_token(column, player)
            .ok_or(IllegalMove::ColumnFull(column))?;

        debug_assert!(
            self.board.column_is_grounded(column),
            "floating token in column {column}"
        );

        if self.connects_four(row, column, player) {
            self.winner = Some(player);
            self.over = true;
        } else if self.board.is_full() {
            self.over = true;
        }

        Ok(row)
    }

    /// Check whether the token just placed at (`row`, `column`) completes
    /// a run of four.
    ///
    /// Examines only the four lines through the played cell, counting
    /// consecutive own tokens along both rays of each direction. This
    /// detects every win, including runs flush against a board edge.
    fn connects_four(&self, row: usize, column: usize, player: Player) -> bool {
        let target = player.cell();
        DIRECTIONS.iter().any(|&(dr, dc)| {
            let run = 1
                + self.ray_run(row, column, dr, dc, target)
                + self.ray_run(row, column, -dr, -dc, target);
            run >= 4
        })
    }

    /// Length of the run of `target` cells starting one step from
    /// (`row`, `column`) along (`dr`, `dc`).
    fn ray_run(&self, row: usize, column: usize, dr: isize, dc: isize, target: Cell) -> usize {
        let mut run = 0;
        let mut r = row as isize + dr;
        let mut c = column as isize + dc;
        while (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.board.get(r as usize, c as usize) == target
        {
            run += 1;
            r += dr;
            c += dc;
        }
        run
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
