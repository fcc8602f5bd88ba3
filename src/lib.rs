//! Scotland Yard pursuit-evasion on a fixed graph
//!
//! This crate provides:
//! - A turn-based game engine: one evader (Mr. X) and a configurable
//!   number of detectives alternating moves along the edges of a fixed
//!   undirected graph
//! - An exhaustive adversarial solver that decides, exactly, whether
//!   Mr. X can force survival for a given number of rounds, and extracts
//!   a deterministic move policy either way
//! - Policy persistence in the `scotlandyard-policy-v2` JSON format
//! - Pluggable move strategies (random, greedy, policy lookup) and
//!   turn-by-turn playback

pub mod cli;
pub mod error;
pub mod game;
pub mod persist;
pub mod playback;
pub mod solver;
pub mod strategy;
pub mod types;

pub use error::{Error, Result};
pub use game::{Board, GameConfig, GameState, GameStatus, Turn};
pub use persist::{POLICY_FORMAT, PolicyFile, SolverSummary};
pub use playback::{MatchRunner, StepRecord};
pub use solver::{Policy, SolverResult, solve};
pub use strategy::{GreedyStrategy, PolicyStrategy, RandomStrategy, Strategy};
pub use types::{NodeId, StateKey};
