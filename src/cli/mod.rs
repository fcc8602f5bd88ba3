//! CLI infrastructure for the Scotland Yard toolkit
//!
//! This module provides the command-line interface for solving starting
//! configurations and playing games back with configurable strategies.

pub mod commands;
pub mod output;
