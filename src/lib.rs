//! Solver library for the truck weights and powerups puzzle.
//!
//! The truck starts at a small value. Weights can be added once the truck is
//! strictly heavier than them, and powerups multiply the truck, alone or in
//! combination. The solver searches powerup application orders (weights are
//! always added greedily) for logs that consume every weight.

pub mod bounded;
pub mod error;
pub mod pruning;
pub mod puzzle;
pub mod replay;
pub mod solver;
pub mod state;
pub mod subsets;

// Re-export main types
pub use bounded::{BoundedPriority, BoundedPriorityExt};
pub use error::{CliError, ConfigError, ReplayError};
pub use puzzle::{group_digits, pretty_list, render_log, Operation, PuzzleConfig};
pub use replay::replay;
pub use solver::{search, solve, SearchMode, SolverConfig, SolverResult, DEFAULT_QUEUE_BOUND};
pub use state::PuzzleState;
pub use subsets::{powerup_sets, NonEmptySubsets, PowerupSet};
