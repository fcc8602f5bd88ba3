//! Legality and transition logic: the authoritative turn-order state machine
//!
//! The engine is purely functional. Every function takes a state and
//! produces either a classification or a new state; nothing here holds
//! mutable storage, which is what lets the solver hash states freely.

use super::{
    board::Board,
    state::{GameState, GameStatus, Turn},
};
use crate::types::NodeId;

/// Legal destinations for the player to move, ascending by node id.
///
/// Mr. X may move to any neighbor not occupied by a detective; an empty
/// result means he is trapped. A detective may move to any neighbor not
/// occupied by another detective, and moving onto Mr. X's node is how
/// capture happens. A detective with no free neighbor forfeits the move:
/// its only legal destination is its current node.
pub fn legal_moves(board: &Board, state: &GameState) -> Vec<NodeId> {
    match state.turn {
        Turn::MrX => board
            .neighbors(state.mrx)
            .filter(|n| !state.detectives.contains(n))
            .collect(),
        Turn::Detective(i) => {
            let here = state.detectives[i];
            let moves: Vec<NodeId> = board
                .neighbors(here)
                .filter(|&n| {
                    state
                        .detectives
                        .iter()
                        .enumerate()
                        .all(|(j, &d)| j == i || d != n)
                })
                .collect();
            if moves.is_empty() { vec![here] } else { moves }
        }
    }
}

/// Build the successor state for a move, without legality checks.
///
/// Mr. X's move keeps the round number; advancing from the last detective
/// back to Mr. X increments it.
fn advance(state: &GameState, dest: NodeId) -> GameState {
    let mut next = state.clone();
    match state.turn {
        Turn::MrX => {
            next.mrx = dest;
            if state.detectives.is_empty() {
                next.round += 1;
            } else {
                next.turn = Turn::Detective(0);
            }
        }
        Turn::Detective(i) => {
            next.detectives[i] = dest;
            if i + 1 < state.detectives.len() {
                next.turn = Turn::Detective(i + 1);
            } else {
                next.turn = Turn::MrX;
                next.round += 1;
            }
        }
    }
    next
}

/// Apply a move after validating it.
///
/// # Errors
///
/// Returns [`crate::Error::IllegalMove`] if `dest` is not among the legal
/// moves for the player whose turn it is.
pub fn apply(board: &Board, state: &GameState, dest: NodeId) -> Result<GameState, crate::Error> {
    if !legal_moves(board, state).contains(&dest) {
        let from = match state.turn {
            Turn::MrX => state.mrx,
            Turn::Detective(i) => state.detectives[i],
        };
        return Err(crate::Error::IllegalMove { from, to: dest });
    }
    Ok(advance(state, dest))
}

/// Enumerate `(move, successor)` pairs in ascending move order.
///
/// Empty exactly when Mr. X is to move and trapped.
pub fn successors(board: &Board, state: &GameState) -> Vec<(NodeId, GameState)> {
    legal_moves(board, state)
        .into_iter()
        .map(|dest| (dest, advance(state, dest)))
        .collect()
}

/// Classify a state. Checks are ordered: capture by occupation first, then
/// round survival, then the trapped-evader rule.
pub fn status(board: &Board, state: &GameState, max_rounds: u32) -> GameStatus {
    if state.detectives.contains(&state.mrx) {
        return GameStatus::Captured;
    }
    if state.is_mrx_turn() {
        if state.round >= max_rounds {
            return GameStatus::Survived;
        }
        if legal_moves(board, state).is_empty() {
            return GameStatus::Captured;
        }
    }
    GameStatus::InProgress
}
