//! Error types for configuration, replay, and the CLI.
//!
//! The search itself has no error path: "no solution" is a normal result and
//! broken preconditions panic.

use thiserror::Error;

/// Problems with a puzzle configuration, detected before any search runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("start truck value must be positive")]
    ZeroTruck,

    #[error("weight at position {0} is zero")]
    ZeroWeight(usize),

    #[error("powerup at position {0} is zero")]
    ZeroPowerup(usize),

    #[error("too many powerups: {count} (at most {max})")]
    TooManyPowerups { count: usize, max: usize },

    #[error("truck value could exceed 128 bits with these weights and powerups")]
    Overflow,
}

/// Reasons a recorded operation log does not solve a puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("step {step}: cannot add {weight} to truck {truck}")]
    UnreachableWeight { step: usize, weight: u64, truck: u128 },

    #[error("step {step}: weight {weight} is not waiting to be added")]
    UnknownWeight { step: usize, weight: u64 },

    #[error("step {step}: powerup {powerup} is not available")]
    UnavailablePowerup { step: usize, powerup: u64 },

    #[error("{0} weight(s) left unconsumed")]
    Unfinished(usize),
}

/// Top-level errors surfaced by the command line front end.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read puzzle: {0}")]
    Io(#[from] std::io::Error),

    #[error("error parsing puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid puzzle: {0}")]
    Config(#[from] ConfigError),

    #[error("must provide either a file path or --stdin, not both")]
    AmbiguousInput,
}
