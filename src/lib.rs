//! # connect4-core
//!
//! A Connect Four rules engine with a Monte Carlo tree search opponent.
//!
//! ## Design Principles
//!
//! 1. **Strict Ownership**: Only [`GameEngine`] mutates its [`Board`].
//!    Every other component acts through the engine's methods.
//!
//! 2. **Cheap Cloning**: The board is a fixed 6x7 array, so an engine
//!    clone is a full deep copy with no shared state. Rollouts each own
//!    their clone and need no synchronization.
//!
//! 3. **Deterministic Search**: All randomness flows through a seedable
//!    [`GameRng`], so any search result can be reproduced from its seed.
//!
//! ## Architecture
//!
//! An external presentation layer calls [`SessionManager::play`] with a
//! column. The session validates and applies the human move; in
//! single-player mode it then asks [`MonteCarloAi`] for a reply against
//! the live engine and applies it. The caller receives a [`MoveResult`]
//! describing everything that happened and renders from that.
//!
//! ## Usage
//!
//! ```
//! use connect4_core::{GameMode, SearchConfig, SessionManager};
//!
//! let config = SearchConfig::default().with_seed(7).with_iterations(200);
//! let mut session = SessionManager::with_config(GameMode::SinglePlayer, config);
//!
//! let result = session.play(3).unwrap();
//! assert_eq!(result.moves.len(), 2); // human move plus the engine's reply
//! ```
//!
//! ## Modules
//!
//! - `core`: Board storage, players, rules engine, illegal-move error, RNG
//! - `mcts`: Monte Carlo Tree Search opponent
//! - `session`: Turn sequencing and the `MoveResult` DTO

pub mod core;
pub mod mcts;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameEngine, GameRng, IllegalMove, Player, COLS, ROWS};

pub use crate::mcts::{ColumnNode, MonteCarloAi, SearchConfig, SearchStats};

pub use crate::session::{AppliedMove, GameMode, MoveResult, SessionManager};
