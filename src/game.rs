//! Pursuit-evasion game implementation

pub mod board;
pub mod config;
pub mod engine;
pub mod state;

pub use board::Board;
pub use config::GameConfig;
pub use state::{GameState, GameStatus, Turn};
