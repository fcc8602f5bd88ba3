//! Turn-by-turn playback of a game with injected strategies
//!
//! The runner owns nothing but the current state and the strategy objects;
//! all rules live in [`crate::game::engine`]. Strategy choices are applied
//! through the validating transition, so a strategy returning an illegal
//! move surfaces as an error instead of corrupting the game.

use crate::{
    game::{Board, GameConfig, GameState, GameStatus, Turn, engine},
    strategy::Strategy,
    types::NodeId,
};

/// One executed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    pub turn: Turn,
    pub from: NodeId,
    pub to: NodeId,
    /// A detective with no free neighbor stayed in place.
    pub forced_pass: bool,
}

/// Drives one game from a starting configuration to a terminal state.
pub struct MatchRunner<'a> {
    board: &'a Board,
    max_rounds: u32,
    state: GameState,
    mrx_strategy: Box<dyn Strategy>,
    detective_strategies: Vec<Box<dyn Strategy>>,
}

impl<'a> MatchRunner<'a> {
    /// Create a runner for a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the config is invalid for `board`
    /// or the number of detective strategies does not match the number of
    /// detectives.
    pub fn new(
        board: &'a Board,
        config: &GameConfig,
        mrx_strategy: Box<dyn Strategy>,
        detective_strategies: Vec<Box<dyn Strategy>>,
    ) -> Result<Self, crate::Error> {
        config.validate(board)?;
        if detective_strategies.len() != config.detective_starts.len() {
            return Err(crate::Error::StrategyCountMismatch {
                expected: config.detective_starts.len(),
                got: detective_strategies.len(),
            });
        }

        Ok(MatchRunner {
            board,
            max_rounds: config.max_rounds,
            state: config.initial_state(),
            mrx_strategy,
            detective_strategies,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        engine::status(self.board, &self.state, self.max_rounds)
    }

    /// Execute one player's move and advance the turn.
    ///
    /// Returns `None` once the game has reached a terminal state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if the acting strategy picks
    /// a destination outside its legal moves.
    pub fn step(&mut self) -> Result<Option<StepRecord>, crate::Error> {
        if self.status().is_terminal() {
            return Ok(None);
        }

        let legal = engine::legal_moves(self.board, &self.state);
        let (from, strategy) = match self.state.turn {
            Turn::MrX => (self.state.mrx, &mut self.mrx_strategy),
            Turn::Detective(i) => (self.state.detectives[i], &mut self.detective_strategies[i]),
        };

        let dest = strategy.choose_move(self.board, &self.state, &legal);
        let record = StepRecord {
            turn: self.state.turn,
            from,
            to: dest,
            forced_pass: self.state.turn != Turn::MrX && dest == from,
        };

        self.state = engine::apply(self.board, &self.state, dest)?;
        Ok(Some(record))
    }

    /// Play until the game is over and return the final status.
    pub fn play_game(&mut self) -> Result<GameStatus, crate::Error> {
        while self.step()?.is_some() {}
        Ok(self.status())
    }
}
