//! Pluggable move-choice strategies
//!
//! A strategy is a decision function, not a search: given the board, the
//! current state and the legal moves for the player whose turn it is
//! (identified by `state.turn`), it picks one destination. The exhaustive
//! solver does not go through this interface, but the policies it produces
//! are consumed through it during playback.

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use crate::{
    game::{Board, GameState, Turn},
    solver::Policy,
    types::NodeId,
};

/// Interface every Mr. X / detective strategy implements.
pub trait Strategy {
    /// Pick a destination from `legal_moves`.
    ///
    /// `legal_moves` is non-empty and ascending by node id; the returned
    /// node must be one of its elements.
    fn choose_move(&mut self, board: &Board, state: &GameState, legal_moves: &[NodeId]) -> NodeId;
}

/// Baseline strategy: a uniformly random legal move.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Unseeded strategies still use a seeded rng so a game can be
    /// replayed when the seed is logged.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, _board: &Board, _state: &GameState, legal_moves: &[NodeId]) -> NodeId {
        *legal_moves
            .choose(&mut self.rng)
            .expect("choose_move requires at least one legal move")
    }
}

/// Single-ply distance heuristic.
///
/// Detectives step toward Mr. X along shortest paths; Mr. X steps to the
/// destination that maximizes his distance to the nearest detective.
/// Unreachable positions count as infinitely far. Ties break toward the
/// lowest-numbered node.
#[derive(Debug, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    pub fn new() -> Self {
        GreedyStrategy
    }
}

impl Strategy for GreedyStrategy {
    fn choose_move(&mut self, board: &Board, state: &GameState, legal_moves: &[NodeId]) -> NodeId {
        let chosen = match state.turn {
            Turn::MrX => {
                let detective_distances: Vec<_> = state
                    .detectives
                    .iter()
                    .map(|&d| board.distances(d))
                    .collect();
                pick(legal_moves, |dest| {
                    detective_distances
                        .iter()
                        .map(|dist| dist.get(&dest).copied().map_or(u64::MAX, u64::from))
                        .min()
                        .unwrap_or(u64::MAX)
                }, true)
            }
            Turn::Detective(_) => {
                let to_mrx = board.distances(state.mrx);
                pick(legal_moves, |dest| {
                    to_mrx.get(&dest).copied().map_or(u64::MAX, u64::from)
                }, false)
            }
        };
        chosen.expect("choose_move requires at least one legal move")
    }
}

/// First legal move with the best score; `maximize` selects the direction.
fn pick(
    legal_moves: &[NodeId],
    score: impl Fn(NodeId) -> u64,
    maximize: bool,
) -> Option<NodeId> {
    let mut best: Option<(NodeId, u64)> = None;
    for &dest in legal_moves {
        let s = score(dest);
        let better = match best {
            None => true,
            Some((_, current)) => {
                if maximize {
                    s > current
                } else {
                    s < current
                }
            }
        };
        if better {
            best = Some((dest, s));
        }
    }
    best.map(|(dest, _)| dest)
}

/// Mr. X strategy backed by a solved policy.
///
/// States missing from the policy fall back to the lowest-numbered legal
/// move, the same deterministic fallback the solver records on losing
/// lines.
pub struct PolicyStrategy {
    policy: Policy,
}

impl PolicyStrategy {
    pub fn new(policy: Policy) -> Self {
        PolicyStrategy { policy }
    }
}

impl Strategy for PolicyStrategy {
    fn choose_move(&mut self, _board: &Board, state: &GameState, legal_moves: &[NodeId]) -> NodeId {
        if let Some(dest) = self.policy.recommend(state)
            && legal_moves.contains(&dest)
        {
            return dest;
        }
        *legal_moves
            .first()
            .expect("choose_move requires at least one legal move")
    }
}
