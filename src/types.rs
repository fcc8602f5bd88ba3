//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{GameState, Turn};

/// A node on the game board.
///
/// Node ids are small positive integers taken from the board definition;
/// whether a given id belongs to a particular board is checked against
/// [`crate::game::Board::contains`] at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u16);

impl NodeId {
    /// Create a new node id.
    pub const fn new(value: u16) -> Self {
        NodeId(value)
    }

    /// Get the inner value.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl From<u16> for NodeId {
    fn from(value: u16) -> Self {
        NodeId(value)
    }
}

impl From<NodeId> for u16 {
    fn from(node: NodeId) -> Self {
        node.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated canonical state key.
///
/// Keys identify Mr. X decision states in a solved policy and in the
/// persisted policy interchange format. The textual form is
///
/// ```text
/// r=<round>|p=mrx|x=<Mr. X node>|d=<detective nodes, comma-joined>
/// ```
///
/// Detective positions appear in fixed identity order, so two keys are
/// equal exactly when the underlying states are. Only Mr. X turn states
/// are ever keyed; detective decisions are not part of a policy.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateKey(String);

impl StateKey {
    /// Build the canonical key for a Mr. X turn state.
    ///
    /// Returns `None` when it is a detective's turn.
    pub fn for_state(state: &GameState) -> Option<Self> {
        if state.turn != Turn::MrX {
            return None;
        }
        let detectives = state
            .detectives
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(",");
        Some(StateKey(format!(
            "r={}|p=mrx|x={}|d={}",
            state.round, state.mrx, detectives
        )))
    }

    /// Parse and validate a state key from a string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidStateKey`] if the string does not
    /// decode to a Mr. X turn state.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        let key = StateKey(s.to_string());
        key.decode()?;
        Ok(key)
    }

    /// Reconstruct the Mr. X turn state this key denotes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidStateKey`] if any field is missing
    /// or malformed.
    pub fn decode(&self) -> Result<GameState, crate::Error> {
        let invalid = |reason: &str| crate::Error::InvalidStateKey {
            key: self.0.clone(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = self.0.split('|').collect();
        if parts.len() != 4 {
            return Err(invalid("expected four |-separated fields"));
        }

        let round = parts[0]
            .strip_prefix("r=")
            .ok_or_else(|| invalid("missing r= field"))?
            .parse::<u32>()
            .map_err(|_| invalid("round is not a non-negative integer"))?;

        let player = parts[1]
            .strip_prefix("p=")
            .ok_or_else(|| invalid("missing p= field"))?;
        if player != "mrx" {
            return Err(invalid("only Mr. X turn states are keyed"));
        }

        let mrx = parts[2]
            .strip_prefix("x=")
            .ok_or_else(|| invalid("missing x= field"))?
            .parse::<u16>()
            .map_err(|_| invalid("Mr. X position is not a node id"))?;

        let detectives = parts[3]
            .strip_prefix("d=")
            .ok_or_else(|| invalid("missing d= field"))?;
        if detectives.is_empty() {
            return Err(invalid("no detective positions"));
        }
        let detectives = detectives
            .split(',')
            .map(|d| {
                d.parse::<u16>()
                    .map(NodeId::new)
                    .map_err(|_| invalid("detective position is not a node id"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GameState {
            round,
            turn: Turn::MrX,
            mrx: NodeId::new(mrx),
            detectives,
        })
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for StateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
