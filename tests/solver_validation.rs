//! Test suite for the exhaustive solver
//! Reproduces reference solves and validates the solver's output contract

use scotlandyard::{
    Board, GameConfig, NodeId, SolverResult, StateKey,
    game::engine::legal_moves,
    solve,
};

fn config(mrx: u16, detectives: &[u16], max_rounds: u32) -> GameConfig {
    GameConfig::new(
        NodeId::new(mrx),
        detectives.iter().copied().map(NodeId::new).collect(),
        max_rounds,
    )
}

fn solve_20(mrx: u16, detectives: &[u16], max_rounds: u32) -> SolverResult {
    let board = Board::top_right_20();
    solve(&board, &config(mrx, detectives, max_rounds)).unwrap()
}

mod reference_fixtures {
    use super::*;

    /// The documented reference solve on the 20-node board.
    #[test]
    fn two_detectives_four_rounds() {
        let result = solve_20(1, &[5, 10], 4);
        assert!(result.forced_escape);
        assert_eq!(result.states_evaluated, 630);
        assert_eq!(result.policy.len(), 113);

        // The recorded opening is the lowest-numbered winning move.
        let key = StateKey::parse("r=0|p=mrx|x=1|d=5,10").unwrap();
        assert_eq!(result.policy.get(&key), Some(NodeId::new(8)));
    }

    #[test]
    fn shorter_horizons_shrink_the_search() {
        let result = solve_20(1, &[5, 10], 3);
        assert!(result.forced_escape);
        assert_eq!(result.states_evaluated, 253);
        assert_eq!(result.policy.len(), 53);
    }

    #[test]
    fn five_rounds_flip_the_verdict() {
        let result = solve_20(1, &[5, 10], 5);
        assert!(!result.forced_escape);
        assert_eq!(result.states_evaluated, 959);
        assert_eq!(result.policy.len(), 229);
    }

    #[test]
    fn single_detective_fixtures() {
        let result = solve_20(3, &[10], 6);
        assert!(result.forced_escape);
        assert_eq!(result.states_evaluated, 260);
        assert_eq!(result.policy.len(), 82);

        let result = solve_20(3, &[10], 10);
        assert!(!result.forced_escape);
        assert_eq!(result.states_evaluated, 769);
        assert_eq!(result.policy.len(), 289);
    }

    #[test]
    fn cornered_mrx_loses_quickly() {
        let result = solve_20(9, &[19, 20], 3);
        assert!(!result.forced_escape);
        assert_eq!(result.states_evaluated, 83);
        assert_eq!(result.policy.len(), 14);
    }

    #[test]
    fn one_round_with_adjacent_detectives_is_hopeless() {
        let result = solve_20(14, &[13, 15], 1);
        assert!(!result.forced_escape);
        assert_eq!(result.states_evaluated, 1);
        assert!(result.policy.is_empty());
    }
}

mod output_contract {
    use super::*;

    #[test]
    fn solving_twice_yields_identical_results() {
        let board = Board::top_right_20();
        let config = config(1, &[5, 10], 4);

        let first = solve(&board, &config).unwrap();
        let second = solve(&board, &config).unwrap();

        assert_eq!(first.forced_escape, second.forced_escape);
        assert_eq!(first.states_evaluated, second.states_evaluated);
        assert_eq!(first.policy, second.policy);
    }

    #[test]
    fn policy_never_outgrows_the_evaluation_count() {
        for (mrx, detectives, max_rounds) in [
            (1u16, vec![5u16, 10], 4u32),
            (1, vec![5, 10], 5),
            (3, vec![10], 6),
            (9, vec![19, 20], 3),
            (1, vec![5, 10], 0),
        ] {
            let result = solve_20(mrx, &detectives, max_rounds);
            assert!(result.policy.len() <= result.states_evaluated);
        }
    }

    #[test]
    fn every_policy_entry_is_a_legal_move() {
        let board = Board::top_right_20();
        let result = solve_20(1, &[5, 10], 5);
        for (key, dest) in result.policy.iter() {
            let state = key.decode().unwrap();
            assert!(
                legal_moves(&board, &state).contains(&dest),
                "policy recommends illegal move {dest} at {key}"
            );
        }
    }

    #[test]
    fn policy_keys_parse_and_round_trip() {
        let result = solve_20(1, &[5, 10], 4);
        for (key, _) in result.policy.iter() {
            let reparsed = StateKey::parse(key.as_str()).unwrap();
            assert_eq!(&reparsed, key);
            let state = key.decode().unwrap();
            assert_eq!(StateKey::for_state(&state).as_ref(), Some(key));
        }
    }

    #[test]
    fn zero_round_games_are_an_immediate_escape() {
        let result = solve_20(1, &[5, 10], 0);
        assert!(result.forced_escape);
        assert_eq!(result.states_evaluated, 1);
        assert!(result.policy.is_empty());
    }
}
