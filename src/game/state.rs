//! Game state representation

use std::fmt;

use crate::types::NodeId;

/// Whose move it is within the current round.
///
/// Mr. X moves first each round; detectives follow in fixed index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    MrX,
    Detective(usize),
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::MrX => write!(f, "Mr. X"),
            Turn::Detective(i) => write!(f, "Detective {i}"),
        }
    }
}

/// Full state of a Scotland Yard game.
///
/// This is a plain value type: every transition produces a new state, and
/// two states with identical components are the same search node no matter
/// how they were reached. `round` counts completed full rounds, starting
/// at 0; detective positions are indexed by detective identity, so their
/// order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub round: u32,
    pub turn: Turn,
    pub mrx: NodeId,
    pub detectives: Vec<NodeId>,
}

impl GameState {
    /// Create the initial state: round 0, Mr. X to move.
    pub fn initial(mrx: NodeId, detectives: Vec<NodeId>) -> Self {
        GameState {
            round: 0,
            turn: Turn::MrX,
            mrx,
            detectives,
        }
    }

    pub fn num_detectives(&self) -> usize {
        self.detectives.len()
    }

    pub fn is_mrx_turn(&self) -> bool {
        self.turn == Turn::MrX
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detectives = self
            .detectives
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "round {}, {} to move, Mr. X at {}, detectives at [{}]",
            self.round, self.turn, self.mrx, detectives
        )
    }
}

/// Classification of a game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    /// A detective occupies Mr. X's node, or Mr. X has no legal move.
    Captured,
    /// Mr. X completed the required number of full rounds uncaptured.
    Survived,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Captured => write!(f, "Detectives win!"),
            GameStatus::Survived => write!(f, "Mr. X escapes!"),
        }
    }
}
