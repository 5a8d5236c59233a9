//! Monte Carlo Tree Search opponent.
//!
//! ## Overview
//!
//! The search keeps one statistics node per legal column. Each iteration:
//!
//! 1. **Selection** — pick the column maximizing the UCB1 score; an
//!    unvisited column scores +infinity, so every legal column is tried
//!    once before any is revisited.
//! 2. **Simulation** — clone the engine, apply the candidate move, then
//!    alternate uniformly random legal moves until the game ends.
//! 3. **Utility** — +1 if the searching player won, −1 otherwise
//!    (draws count as losses, discouraging passive lines).
//! 4. **Backpropagation** — accumulate utility and visits on the column
//!    node and bump the root visit counter.
//!
//! The final move is the most-visited column (robust child), which is
//! less sensitive to rollout variance than the average utility.
//!
//! ## Usage
//!
//! ```
//! use connect4_core::{GameEngine, MonteCarloAi, Player, SearchConfig};
//!
//! let engine = GameEngine::new();
//! let mut ai = MonteCarloAi::new(SearchConfig::default().with_seed(42));
//!
//! let column = ai.select_move(&engine, Player::One, 500);
//! assert!(column.is_some());
//! ```

pub mod config;
pub mod node;
pub mod search;
pub mod stats;

pub use config::SearchConfig;
pub use node::ColumnNode;
pub use search::MonteCarloAi;
pub use stats::SearchStats;
