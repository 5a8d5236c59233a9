//! Rejected-move error.

use thiserror::Error;

/// A move the engine refuses to apply.
///
/// The board is left untouched in every case; callers are expected to
/// simply discard the attempted input (a click on a full column is
/// rejected, not a crash).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("column {0} is outside the board")]
    OutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}
