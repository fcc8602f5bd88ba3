//! Exhaustive adversarial solver for Mr. X
//!
//! Computes whether Mr. X has a forced escape from a starting configuration
//! when the detectives are fully adversarial. Mathematically it decides
//!
//! ```text
//! exists strategy_MrX such that forall strategy_detectives: Mr. X escapes
//! ```
//!
//! without enumerating detective strategy functions explicitly: every
//! detective action branch is explored at every detective turn. Mr. X turn
//! states are OR nodes (one escaping child suffices), detective turn states
//! are AND nodes (every child must escape). The search is exact, memoized
//! over canonical states, and bounded only by the finite state space.

use std::collections::HashMap;

use super::policy::Policy;
use crate::{
    game::{Board, GameConfig, GameState, GameStatus, Turn, engine},
    types::{NodeId, StateKey},
};

/// Output of the exhaustive solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverResult {
    /// Whether Mr. X can guarantee survival against every detective line.
    pub forced_escape: bool,
    /// Number of distinct states evaluated (memo hits are not counted).
    pub states_evaluated: usize,
    /// Recommended move for every Mr. X decision state reached, winning
    /// or not.
    pub policy: Policy,
}

/// Solve a starting configuration exactly.
///
/// Move enumeration is ascending by node id and ties between equally
/// winning moves break toward the lowest-numbered node, so two solves of
/// the same configuration produce identical results, entry for entry.
///
/// # Errors
///
/// Returns a configuration error if the starting configuration is invalid
/// for `board`. The search itself cannot fail: both verdicts are results.
pub fn solve(board: &Board, config: &GameConfig) -> Result<SolverResult, crate::Error> {
    config.validate(board)?;

    let mut search = Search {
        board,
        max_rounds: config.max_rounds,
        memo: HashMap::new(),
        policy: Policy::default(),
    };
    let forced_escape = search.mrx_can_escape(&config.initial_state());

    Ok(SolverResult {
        forced_escape,
        states_evaluated: search.memo.len(),
        policy: search.policy,
    })
}

struct Search<'a> {
    board: &'a Board,
    max_rounds: u32,
    memo: HashMap<GameState, bool>,
    policy: Policy,
}

impl Search<'_> {
    /// Value of `state`: can Mr. X force survival from here?
    fn mrx_can_escape(&mut self, state: &GameState) -> bool {
        if let Some(&value) = self.memo.get(state) {
            return value;
        }

        let value = match engine::status(self.board, state, self.max_rounds) {
            GameStatus::Captured => false,
            GameStatus::Survived => true,
            GameStatus::InProgress => self.evaluate_children(state),
        };

        self.memo.insert(state.clone(), value);
        value
    }

    // Every child is evaluated at both node kinds, with no early exit:
    // `states_evaluated` and the loss-side policy entries must be a pure
    // function of the configuration, and both depend on the full child set.
    fn evaluate_children(&mut self, state: &GameState) -> bool {
        let children = engine::successors(self.board, state);

        match state.turn {
            Turn::MrX => {
                let mut outcomes: Vec<(NodeId, bool)> = Vec::with_capacity(children.len());
                for (dest, child) in &children {
                    outcomes.push((*dest, self.mrx_can_escape(child)));
                }

                // Lowest-numbered winning move, falling back to the
                // lowest-numbered legal move when every line loses.
                let winning = outcomes
                    .iter()
                    .find(|&&(_, escapes)| escapes)
                    .map(|&(dest, _)| dest);
                let chosen = winning.or_else(|| outcomes.first().map(|&(dest, _)| dest));
                if let Some(dest) = chosen
                    && let Some(key) = StateKey::for_state(state)
                {
                    self.policy.record(key, dest);
                }

                winning.is_some()
            }
            Turn::Detective(_) => {
                let mut all_escape = true;
                for (_, child) in &children {
                    if !self.mrx_can_escape(child) {
                        all_escape = false;
                    }
                }
                all_escape
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeId;

    fn config(mrx: u16, detectives: &[u16], max_rounds: u32) -> GameConfig {
        GameConfig::new(
            NodeId::new(mrx),
            detectives.iter().copied().map(NodeId::new).collect(),
            max_rounds,
        )
    }

    #[test]
    fn zero_rounds_is_an_immediate_escape() {
        let board = Board::top_right_20();
        let result = solve(&board, &config(1, &[5, 10], 0)).unwrap();
        assert!(result.forced_escape);
        assert_eq!(result.states_evaluated, 1);
        assert!(result.policy.is_empty());
    }

    #[test]
    fn trapped_start_is_an_immediate_capture() {
        let board = Board::top_right_20();
        // Node 1's only neighbors are 8 and 9.
        let result = solve(&board, &config(1, &[8, 9], 3)).unwrap();
        assert!(!result.forced_escape);
        assert_eq!(result.states_evaluated, 1);
        assert!(result.policy.is_empty());
    }

    #[test]
    fn invalid_configurations_are_rejected_before_searching() {
        let board = Board::top_right_20();
        assert!(solve(&board, &config(99, &[5, 10], 4)).is_err());
        assert!(solve(&board, &config(1, &[5, 5], 4)).is_err());
    }

    #[test]
    fn single_detective_on_an_open_board_loses_short_games() {
        let board = Board::top_right_20();
        let result = solve(&board, &config(3, &[10], 2)).unwrap();
        assert!(result.forced_escape);
        assert_eq!(result.states_evaluated, 23);
        assert_eq!(result.policy.len(), 6);

        let start = config(3, &[10], 2).initial_state();
        assert_eq!(result.policy.recommend(&start), Some(NodeId::new(4)));
    }

    #[test]
    fn policy_records_a_fallback_move_even_when_losing() {
        let board = Board::top_right_20();
        // Two detectives adjacent to Mr. X's corner run him down quickly.
        let result = solve(&board, &config(9, &[19, 20], 2)).unwrap();
        assert!(!result.forced_escape);
        assert_eq!(result.states_evaluated, 26);
        assert_eq!(result.policy.len(), 3);

        // The fallback is the lowest-numbered legal move.
        let start = config(9, &[19, 20], 2).initial_state();
        assert_eq!(result.policy.recommend(&start), Some(NodeId::new(1)));
    }
}
