//! Data transfer objects handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// One token placement applied during a [`play`] call.
///
/// [`play`]: super::SessionManager::play
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    /// Column the token was dropped into.
    pub column: usize,

    /// Row the token landed in.
    pub row: usize,

    /// Owner of the token.
    pub player: Player,
}

/// Snapshot of a `play` call's effect, in application order.
///
/// In single-player mode `moves` carries the human move and the AI's
/// reply together; when the engine was already terminal it is empty.
/// External collaborators render from this and the engine's query
/// methods; they never reach into the board directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveResult {
    /// The winning player, if the game has ended with a winner.
    pub winner: Option<Player>,

    /// Whether the game ended with a full board and no winner.
    pub is_draw: bool,

    /// Whether the game has ended.
    pub is_over: bool,

    /// Moves applied by this call, in order.
    pub moves: Vec<AppliedMove>,
}
