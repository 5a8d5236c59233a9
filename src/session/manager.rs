//! Session manager: sequences turns and orchestrates the AI's reply.

use serde::{Deserialize, Serialize};

use crate::core::{GameEngine, IllegalMove, Player};
use crate::mcts::{MonteCarloAi, SearchConfig};

use super::result::{AppliedMove, MoveResult};

/// Game mode selected when a session starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Human versus the Monte Carlo opponent.
    SinglePlayer,
    /// Two humans sharing the session.
    Multiplayer,
}

/// Sequences turns over one [`GameEngine`].
///
/// In single-player mode a successful human move is followed by the
/// AI's reply inside the same [`play`] call, and the human remains the
/// current player. In multiplayer mode the current player flips after
/// each successful move.
///
/// [`play`]: SessionManager::play
pub struct SessionManager {
    engine: GameEngine,
    ai: MonteCarloAi,
    current_player: Player,
    mode: GameMode,
}

impl SessionManager {
    /// Start a session with the default search configuration.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self::with_config(mode, SearchConfig::default())
    }

    /// Start a session with a custom search configuration.
    #[must_use]
    pub fn with_config(mode: GameMode, config: SearchConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            ai: MonteCarloAi::new(config),
            current_player: Player::One,
            mode,
        }
    }

    /// Begin a brand-new game in the given mode.
    pub fn start(&mut self, mode: GameMode) {
        self.mode = mode;
        self.restart();
    }

    /// Reset the engine and current player without changing the mode.
    pub fn restart(&mut self) {
        self.engine.reset();
        self.current_player = Player::One;
    }

    /// The player whose move the next `play` call applies.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The session's game mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Read-only engine access for rendering.
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Apply the current player's move in `column`.
    ///
    /// A call on a finished game is a no-op returning an empty-move
    /// result, not an error. An illegal column propagates the engine's
    /// rejection with the session unchanged.
    pub fn play(&mut self, column: usize) -> Result<MoveResult, IllegalMove> {
        if self.engine.is_over() {
            return Ok(self.result(Vec::new()));
        }

        let mut moves = Vec::with_capacity(2);

        let row = self.engine.apply_move(self.current_player, column)?;
        moves.push(AppliedMove {
            column,
            row,
            player: self.current_player,
        });

        match self.mode {
            GameMode::SinglePlayer => {
                if !self.engine.is_over() {
                    let ai_player = self.current_player.other();
                    let budget = self.ai.config().iterations;

                    if let Some(reply) = self.ai.select_move(&self.engine, ai_player, budget) {
                        let row = self
                            .engine
                            .apply_move(ai_player, reply)
                            .expect("search only returns legal columns");
                        moves.push(AppliedMove {
                            column: reply,
                            row,
                            player: ai_player,
                        });
                    }
                }
                // The human stays the current player for the next call
            }
            GameMode::Multiplayer => {
                if !self.engine.is_over() {
                    self.current_player = self.current_player.other();
                }
            }
        }

        Ok(self.result(moves))
    }

    fn result(&self, moves: Vec<AppliedMove>) -> MoveResult {
        MoveResult {
            winner: self.engine.winner(),
            is_draw: self.engine.is_draw(),
            is_over: self.engine.is_over(),
            moves,
        }
    }
}
