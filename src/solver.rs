//! Branch-and-bound search over powerup application orders.
//!
//! Each node first applies greedy reduction. A reduced state with no weights
//! left is a success. Otherwise the node expands every powerup set that
//! passes the ratio cut and recurses on the resulting child. Recursion depth
//! is bounded by the number of powerups, since each child consumes at least
//! one.

use std::time::Instant;

use tracing::{debug, info, info_span, trace};

use crate::pruning::candidates;
use crate::puzzle::{Operation, PuzzleConfig};
use crate::state::PuzzleState;

/// Queue bound that fully sorts the 511 candidate sets of the standard puzzle
pub const DEFAULT_QUEUE_BOUND: usize = 511;

/// When the search stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Stop at the first successful log
    #[default]
    FirstSolution,
    /// Explore every candidate and record every success
    AllSolutions,
}

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Bound for the candidate priority queue; 1 or less keeps raw order
    pub queue_bound: usize,
    pub mode: SearchMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            queue_bound: DEFAULT_QUEUE_BOUND,
            mode: SearchMode::FirstSolution,
        }
    }
}

/// Result of a solver run
#[derive(Debug, Clone)]
pub struct SolverResult {
    /// Successful operation logs in the order they were found
    pub solutions: Vec<Vec<Operation>>,
    /// Number of non-terminal nodes expanded
    pub nodes_explored: usize,
    /// Whether every candidate branch was visited
    pub search_exhausted: bool,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

impl SolverResult {
    pub fn found(&self) -> bool {
        !self.solutions.is_empty()
    }
}

struct Search<'a, N, S> {
    queue_bound: usize,
    on_node: &'a mut N,
    on_success: &'a mut S,
}

impl<N, S> Search<'_, N, S>
where
    N: FnMut(&PuzzleState),
    S: FnMut(&[Operation]) -> bool,
{
    fn run(&mut self, state: &PuzzleState) -> bool {
        let state = state.greedy();
        if state.is_done() {
            return (self.on_success)(state.log());
        }

        (self.on_node)(&state);
        debug!("state:\n{}", state);

        for set in candidates(&state, self.queue_bound) {
            trace!(product = %set.product, values = ?set.values.as_slice(), "powerup set");
            let child = state.apply_powerups(&set.values);
            if !self.run(&child) {
                return false;
            }
        }

        true
    }
}

/// Depth-first search from `state`.
///
/// `on_node` is called once for every node that is not already solved after
/// greedy reduction. `on_success` receives each successful log and returns
/// whether to keep searching. Returns `false` if `on_success` stopped the
/// search, `true` if it ran to exhaustion.
pub fn search<N, S>(
    state: &PuzzleState,
    queue_bound: usize,
    on_node: &mut N,
    on_success: &mut S,
) -> bool
where
    N: FnMut(&PuzzleState),
    S: FnMut(&[Operation]) -> bool,
{
    Search {
        queue_bound,
        on_node,
        on_success,
    }
    .run(state)
}

/// Solve a puzzle, collecting one or all solutions depending on the mode.
///
/// The puzzle is expected to have passed `PuzzleConfig::validate`.
pub fn solve(puzzle: &PuzzleConfig, config: &SolverConfig) -> SolverResult {
    let _span = info_span!(
        "solve",
        weights = puzzle.weights.len(),
        powerups = puzzle.powerups.len(),
        queue_bound = config.queue_bound,
    )
    .entered();
    let start_time = Instant::now();

    let keep_going = config.mode == SearchMode::AllSolutions;
    let mut nodes_explored: usize = 0;
    let mut solutions: Vec<Vec<Operation>> = Vec::new();

    let search_exhausted = search(
        &PuzzleState::from_puzzle(puzzle),
        config.queue_bound,
        &mut |_: &PuzzleState| nodes_explored += 1,
        &mut |log: &[Operation]| {
            solutions.push(log.to_vec());
            keep_going
        },
    );

    let time_elapsed_ms = start_time.elapsed().as_millis() as u64;
    info!(
        solutions = solutions.len(),
        nodes_explored, search_exhausted, time_elapsed_ms, "search finished"
    );

    SolverResult {
        solutions,
        nodes_explored,
        search_exhausted,
        time_elapsed_ms,
    }
}
