//! Puzzle configuration and operation-log types.
//!
//! `PuzzleConfig` deserializes from the camelCase JSON accepted by the CLI;
//! every field is optional and falls back to the standard puzzle.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Starting truck value of the standard puzzle
pub const DEFAULT_START_TRUCK: u64 = 2;

/// Largest powerup multiset the subset mask can address
pub const MAX_POWERUPS: usize = 63;

/// Animal weights of the standard puzzle (unsorted, as listed in the game)
pub const DEFAULT_WEIGHTS: [u64; 10] = [
    94,
    86_000_000,
    220_000_000,
    17,
    2_200,
    52_000,
    10_000_000,
    8,
    9_700_000,
    980_000_000,
];

fn default_weights() -> Vec<u64> {
    DEFAULT_WEIGHTS.to_vec()
}

fn default_powerups() -> Vec<u64> {
    (2..=10).collect()
}

fn default_start_truck() -> u64 {
    DEFAULT_START_TRUCK
}

/// A single entry in the operation log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "lowercase")]
pub enum Operation {
    /// A weight added to the truck by greedy reduction
    Add(u64),
    /// One powerup consumed as part of a multiplied subset
    Multiply(u64),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add(v) => write!(f, "+{}", group_digits(*v as u128)),
            Operation::Multiply(v) => write!(f, "x{}", group_digits(*v as u128)),
        }
    }
}

/// Render a log as space-separated tokens, e.g. `+8 x2 +17`
pub fn render_log(log: &[Operation]) -> String {
    log.iter()
        .map(|op| op.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a list as `[a, b, c]` with grouped digits
pub fn pretty_list(values: &[u64]) -> String {
    let items: Vec<String> = values.iter().map(|&v| group_digits(v as u128)).collect();
    format!("[{}]", items.join(", "))
}

/// Format an integer with `_` between groups of three digits
pub fn group_digits(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push('_');
        }
        out.push(c);
    }
    out
}

/// The complete puzzle definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleConfig {
    #[serde(default = "default_weights")]
    pub weights: Vec<u64>,
    #[serde(default = "default_powerups")]
    pub powerups: Vec<u64>,
    #[serde(default = "default_start_truck")]
    pub start_truck: u64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            weights: default_weights(),
            powerups: default_powerups(),
            start_truck: DEFAULT_START_TRUCK,
        }
    }
}

impl PuzzleConfig {
    pub fn new(weights: Vec<u64>, powerups: Vec<u64>, start_truck: u64) -> Self {
        Self {
            weights,
            powerups,
            start_truck,
        }
    }

    /// Sort weights and powerups ascending
    pub fn sort(&mut self) {
        self.weights.sort_unstable();
        self.powerups.sort_unstable();
    }

    /// Check the puzzle is something the solver can run on.
    ///
    /// Besides rejecting zeros, this proves no truck value reachable during a
    /// search can overflow: the truck never exceeds
    /// `(start + sum of weights) * product of powerups`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_truck == 0 {
            return Err(ConfigError::ZeroTruck);
        }
        if let Some(pos) = self.weights.iter().position(|&w| w == 0) {
            return Err(ConfigError::ZeroWeight(pos));
        }
        if let Some(pos) = self.powerups.iter().position(|&p| p == 0) {
            return Err(ConfigError::ZeroPowerup(pos));
        }
        if self.powerups.len() > MAX_POWERUPS {
            return Err(ConfigError::TooManyPowerups {
                count: self.powerups.len(),
                max: MAX_POWERUPS,
            });
        }

        let total = self
            .weights
            .iter()
            .try_fold(self.start_truck as u128, |acc, &w| acc.checked_add(w as u128))
            .ok_or(ConfigError::Overflow)?;
        let product = self
            .powerups
            .iter()
            .try_fold(1u128, |acc, &p| acc.checked_mul(p as u128))
            .ok_or(ConfigError::Overflow)?;
        total.checked_mul(product).ok_or(ConfigError::Overflow)?;

        Ok(())
    }
}
