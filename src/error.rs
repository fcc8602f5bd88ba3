//! Error types for the Scotland Yard crate

use thiserror::Error;

use crate::types::NodeId;

/// Main error type for the Scotland Yard crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("node {node} is not on the board")]
    InvalidNode { node: NodeId },

    #[error("duplicate starting position: node {node}")]
    DuplicateStart { node: NodeId },

    #[error("at least one detective is required")]
    NoDetectives,

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: NodeId, to: NodeId },

    #[error("expected {expected} detective strategies, got {got}")]
    StrategyCountMismatch { expected: usize, got: usize },

    #[error("unknown board '{name}'. Expected one of: {expected}")]
    UnknownBoard { name: String, expected: String },

    #[error("invalid state key '{key}': {reason}")]
    InvalidStateKey { key: String, reason: String },

    #[error("unsupported policy format '{found}'. Expected '{expected}'")]
    PolicyFormatMismatch { found: String, expected: String },

    #[error("policy file was solved for board '{file}', not '{active}'")]
    BoardMismatch { file: String, active: String },

    #[error("{flag} ({supplied}) does not match the policy file config ({file})")]
    ConfigMismatch {
        flag: String,
        supplied: String,
        file: String,
    },

    #[error("policy file declares {declared} entries but contains {actual}")]
    PolicySizeMismatch { declared: usize, actual: usize },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
