//! Turn sequencing: tracks the current player and game mode, and folds
//! the AI's reply into a human move in single-player games.

pub mod manager;
pub mod result;

pub use manager::{GameMode, SessionManager};
pub use result::{AppliedMove, MoveResult};
