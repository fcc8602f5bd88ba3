//! Solved move policies for Mr. X

use std::collections::BTreeMap;

use crate::{
    game::GameState,
    types::{NodeId, StateKey},
};

/// A mapping from Mr. X decision states to recommended destinations.
///
/// Built incrementally during a solve and frozen once the solve completes;
/// playback components only read it. Backed by a `BTreeMap` so iteration
/// order, and therefore serialization, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    map: BTreeMap<StateKey, NodeId>,
}

impl Policy {
    pub(crate) fn record(&mut self, key: StateKey, dest: NodeId) {
        self.map.insert(key, dest);
    }

    /// Look up the recommended move for a Mr. X turn state.
    ///
    /// Returns `None` on a detective turn or for a state the solve never
    /// reached.
    pub fn recommend(&self, state: &GameState) -> Option<NodeId> {
        let key = StateKey::for_state(state)?;
        self.map.get(&key).copied()
    }

    pub fn get(&self, key: &StateKey) -> Option<NodeId> {
        self.map.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, NodeId)> {
        self.map.iter().map(|(k, &v)| (k, v))
    }
}

impl FromIterator<(StateKey, NodeId)> for Policy {
    fn from_iter<I: IntoIterator<Item = (StateKey, NodeId)>>(iter: I) -> Self {
        Policy {
            map: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Turn;

    #[test]
    fn recommend_matches_recorded_entries() {
        let state = GameState::initial(NodeId::new(1), vec![NodeId::new(5), NodeId::new(10)]);
        let key = StateKey::for_state(&state).unwrap();

        let mut policy = Policy::default();
        assert!(policy.is_empty());
        policy.record(key, NodeId::new(8));

        assert_eq!(policy.len(), 1);
        assert_eq!(policy.recommend(&state), Some(NodeId::new(8)));
    }

    #[test]
    fn detective_turns_have_no_recommendation() {
        let mut state = GameState::initial(NodeId::new(1), vec![NodeId::new(5)]);
        let key = StateKey::for_state(&state).unwrap();

        let mut policy = Policy::default();
        policy.record(key, NodeId::new(8));

        state.turn = Turn::Detective(0);
        assert_eq!(policy.recommend(&state), None);
    }

    #[test]
    fn unknown_states_have_no_recommendation() {
        let policy = Policy::default();
        let state = GameState::initial(NodeId::new(1), vec![NodeId::new(5)]);
        assert_eq!(policy.recommend(&state), None);
    }
}
