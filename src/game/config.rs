//! Starting configuration for a game

use serde::{Deserialize, Serialize};

use super::{board::Board, state::GameState};
use crate::types::NodeId;

/// A game's starting configuration.
///
/// This is the `config` block of the persisted policy format; field names
/// are part of the interchange contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mrx_start: NodeId,
    pub detective_starts: Vec<NodeId>,
    pub max_rounds: u32,
}

impl GameConfig {
    pub fn new(mrx_start: NodeId, detective_starts: Vec<NodeId>, max_rounds: u32) -> Self {
        GameConfig {
            mrx_start,
            detective_starts,
            max_rounds,
        }
    }

    /// Check the configuration against a board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoDetectives`] for an empty detective list,
    /// [`crate::Error::InvalidNode`] for a start position that is not on
    /// the board, and [`crate::Error::DuplicateStart`] when any two pieces
    /// share a starting node.
    pub fn validate(&self, board: &Board) -> Result<(), crate::Error> {
        if self.detective_starts.is_empty() {
            return Err(crate::Error::NoDetectives);
        }

        let mut seen = std::collections::BTreeSet::new();
        for &node in std::iter::once(&self.mrx_start).chain(&self.detective_starts) {
            if !board.contains(node) {
                return Err(crate::Error::InvalidNode { node });
            }
            if !seen.insert(node) {
                return Err(crate::Error::DuplicateStart { node });
            }
        }

        Ok(())
    }

    /// Build the initial game state for this configuration.
    pub fn initial_state(&self) -> GameState {
        GameState::initial(self.mrx_start, self.detective_starts.clone())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mrx_start: NodeId::new(1),
            detective_starts: vec![NodeId::new(5), NodeId::new(10)],
            max_rounds: 15,
        }
    }
}
