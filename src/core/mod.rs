//! Core game types: board storage, players, the rules engine, the
//! illegal-move error, and deterministic RNG.

pub mod board;
pub mod engine;
pub mod error;
pub mod player;
pub mod rng;

pub use board::{Board, Cell, COLS, ROWS};
pub use engine::GameEngine;
pub use error::IllegalMove;
pub use player::Player;
pub use rng::GameRng;
