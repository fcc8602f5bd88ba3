//! Policy persistence
//!
//! Provides save/load support for solved policies in the
//! `scotlandyard-policy-v2` interchange format. Serialization is
//! deterministic: the policy map is ordered by key, so saving the same
//! solve twice produces byte-identical files.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    game::{Board, GameConfig},
    solver::{Policy, SolverResult},
    types::{NodeId, StateKey},
};

/// Format identifier carried by every policy file.
pub const POLICY_FORMAT: &str = "scotlandyard-policy-v2";

/// The `solver` block of a policy file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverSummary {
    pub forced_escape: bool,
    pub states_evaluated: usize,
    pub policy_size: usize,
}

/// Serialized representation of a solved policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyFile {
    /// Format version marker, always [`POLICY_FORMAT`].
    pub format: String,
    /// Identifier of the board the policy was solved on.
    pub board: String,
    /// The starting configuration the solve ran from.
    pub config: GameConfig,
    /// Solve verdict and metrics.
    pub solver: SolverSummary,
    /// Mr. X decision states mapped to recommended destinations.
    pub policy: BTreeMap<StateKey, NodeId>,
}

impl PolicyFile {
    /// Package a solve result for persistence.
    pub fn new(board: &Board, config: GameConfig, result: &SolverResult) -> Self {
        PolicyFile {
            format: POLICY_FORMAT.to_string(),
            board: board.name().to_string(),
            config,
            solver: SolverSummary {
                forced_escape: result.forced_escape,
                states_evaluated: result.states_evaluated,
                policy_size: result.policy.len(),
            },
            policy: result
                .policy
                .iter()
                .map(|(key, dest)| (key.clone(), dest))
                .collect(),
        }
    }

    /// Rebuild an in-memory [`Policy`] from the stored entries.
    pub fn to_policy(&self) -> Policy {
        self.policy
            .iter()
            .map(|(key, &dest)| (key.clone(), dest))
            .collect()
    }

    /// Check a loaded file against the board it will be used on.
    ///
    /// # Errors
    ///
    /// Returns a descriptive error if the format marker is unknown, the
    /// file was solved for a different board, the stored configuration is
    /// invalid, the declared policy size disagrees with the entries, any
    /// state key fails to decode, or any entry references a node that is
    /// not on the board.
    pub fn validate(&self, board: &Board) -> Result<(), crate::Error> {
        if self.format != POLICY_FORMAT {
            return Err(crate::Error::PolicyFormatMismatch {
                found: self.format.clone(),
                expected: POLICY_FORMAT.to_string(),
            });
        }
        if self.board != board.name() {
            return Err(crate::Error::BoardMismatch {
                file: self.board.clone(),
                active: board.name().to_string(),
            });
        }

        self.config.validate(board)?;

        if self.solver.policy_size != self.policy.len() {
            return Err(crate::Error::PolicySizeMismatch {
                declared: self.solver.policy_size,
                actual: self.policy.len(),
            });
        }

        for (key, &dest) in &self.policy {
            let state = key.decode()?;
            for node in std::iter::once(state.mrx).chain(state.detectives) {
                if !board.contains(node) {
                    return Err(crate::Error::InvalidNode { node });
                }
            }
            if !board.contains(dest) {
                return Err(crate::Error::InvalidNode { node: dest });
            }
        }

        Ok(())
    }

    /// Check explicitly supplied configuration flags against the file.
    ///
    /// Flags left unset always pass; a set flag must match the file's
    /// `config` block exactly.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConfigMismatch`] naming the offending flag.
    pub fn ensure_config_matches(
        &self,
        board: Option<&str>,
        mrx_start: Option<NodeId>,
        detective_starts: Option<&[NodeId]>,
        max_rounds: Option<u32>,
    ) -> Result<(), crate::Error> {
        let mismatch = |flag: &str, supplied: String, file: String| crate::Error::ConfigMismatch {
            flag: flag.to_string(),
            supplied,
            file,
        };

        if let Some(name) = board
            && name != self.board
        {
            return Err(mismatch("--board", name.to_string(), self.board.clone()));
        }
        if let Some(mrx) = mrx_start
            && mrx != self.config.mrx_start
        {
            return Err(mismatch(
                "--mrx",
                mrx.to_string(),
                self.config.mrx_start.to_string(),
            ));
        }
        if let Some(detectives) = detective_starts
            && detectives != self.config.detective_starts
        {
            return Err(mismatch(
                "--detectives",
                join_nodes(detectives),
                join_nodes(&self.config.detective_starts),
            ));
        }
        if let Some(rounds) = max_rounds
            && rounds != self.config.max_rounds
        {
            return Err(mismatch(
                "--max-rounds",
                rounds.to_string(),
                self.config.max_rounds.to_string(),
            ));
        }

        Ok(())
    }

    /// Save to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created, or a
    /// serialization error if writing fails.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), crate::Error> {
        let file = File::create(path.as_ref()).map_err(|source| crate::Error::Io {
            operation: format!("create {}", path.as_ref().display()),
            source,
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Load from a JSON file.
    ///
    /// This only parses; call [`PolicyFile::validate`] before using the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened, or a
    /// serialization error for malformed content.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, crate::Error> {
        let file = File::open(path.as_ref()).map_err(|source| crate::Error::Io {
            operation: format!("open {}", path.as_ref().display()),
            source,
        })?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

fn join_nodes(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
