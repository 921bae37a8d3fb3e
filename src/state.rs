//! Immutable puzzle state and its two transitions.
//!
//! Every transition returns a fresh `PuzzleState`; nothing is mutated in
//! place once a state has been built.

use std::fmt;

use crate::puzzle::{group_digits, pretty_list, Operation, PuzzleConfig};

/// Snapshot of a position in the search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    truck: u128,
    /// Remaining weights, ascending
    weights: Vec<u64>,
    /// Remaining powerups, ascending
    powerups: Vec<u64>,
    log: Vec<Operation>,
}

impl PuzzleState {
    /// Build a starting state. Weights and powerups are sorted here so the
    /// greedy rule only ever has to look at the head.
    pub fn new(truck: u128, mut weights: Vec<u64>, mut powerups: Vec<u64>) -> Self {
        assert!(truck > 0, "truck value must be positive");
        weights.sort_unstable();
        powerups.sort_unstable();
        Self {
            truck,
            weights,
            powerups,
            log: Vec::new(),
        }
    }

    /// Starting state for a puzzle
    pub fn from_puzzle(puzzle: &PuzzleConfig) -> Self {
        Self::new(
            puzzle.start_truck as u128,
            puzzle.weights.clone(),
            puzzle.powerups.clone(),
        )
    }

    /// Current truck value
    pub fn truck(&self) -> u128 {
        self.truck
    }

    /// Weights still to be added, ascending
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// Powerups not yet applied, ascending
    pub fn powerups(&self) -> &[u64] {
        &self.powerups
    }

    /// Operations applied so far, in order
    pub fn log(&self) -> &[Operation] {
        &self.log
    }

    /// Consume the state, keeping only its operation log
    pub fn into_log(self) -> Vec<Operation> {
        self.log
    }

    /// Smallest weight still to be added
    pub fn next_weight(&self) -> Option<u64> {
        self.weights.first().copied()
    }

    /// Add every weight the truck can currently carry, smallest first.
    ///
    /// Stops at the first weight that is not strictly below the truck value.
    /// Powerups are left untouched.
    pub fn greedy(&self) -> PuzzleState {
        let mut truck = self.truck;
        let mut log = self.log.clone();
        let mut consumed = 0;

        for &weight in &self.weights {
            if truck <= weight as u128 {
                break;
            }
            truck += weight as u128;
            log.push(Operation::Add(weight));
            consumed += 1;
        }

        PuzzleState {
            truck,
            weights: self.weights[consumed..].to_vec(),
            powerups: self.powerups.clone(),
            log,
        }
    }

    /// Multiply the truck by every value in `subset`, consuming one
    /// occurrence of each from the remaining powerups.
    ///
    /// Panics if the subset is empty or asks for a powerup that is not
    /// available; callers only pass subsets drawn from `self.powerups()`.
    pub fn apply_powerups(&self, subset: &[u64]) -> PuzzleState {
        assert!(!subset.is_empty(), "cannot apply an empty powerup set");

        let mut truck = self.truck;
        let mut powerups = self.powerups.clone();
        let mut log = self.log.clone();

        for &value in subset {
            let pos = powerups
                .iter()
                .position(|&p| p == value)
                .unwrap_or_else(|| panic!("powerup {} is not available", value));
            powerups.remove(pos);
            truck *= value as u128;
            log.push(Operation::Multiply(value));
        }

        PuzzleState {
            truck,
            weights: self.weights.clone(),
            powerups,
            log,
        }
    }

    /// True once every weight has been added. Leftover powerups do not
    /// keep a state from being done.
    pub fn is_done(&self) -> bool {
        self.weights.is_empty()
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "truck:    {}", group_digits(self.truck))?;
        writeln!(f, "weights:  {}", pretty_list(&self.weights))?;
        write!(f, "powerups: {}", pretty_list(&self.powerups))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_sorts_inputs() {
        let state = PuzzleState::new(2, vec![94, 8, 17], vec![5, 2, 3]);
        assert_eq!(state.weights(), &[8, 17, 94]);
        assert_eq!(state.powerups(), &[2, 3, 5]);
        assert!(state.log().is_empty());
    }

    #[test]
    fn test_greedy_consumes_single_weight() {
        let state = PuzzleState::new(3, vec![2], vec![]).greedy();
        assert_eq!(state.truck(), 5);
        assert!(state.is_done());
        assert_eq!(state.log(), &[Operation::Add(2)]);
    }

    #[test]
    fn test_greedy_requires_strictly_greater_truck() {
        let state = PuzzleState::new(5, vec![5, 6], vec![2]).greedy();
        assert_eq!(state.truck(), 5);
        assert_eq!(state.weights(), &[5, 6]);
        assert!(state.log().is_empty());
    }

    #[test]
    fn test_greedy_chains_through_growing_truck() {
        // 2 > 1 -> 3 > 2 -> 5 > 4 -> 9, then 9 is not > 100
        let state = PuzzleState::new(2, vec![1, 2, 4, 100], vec![3]).greedy();
        assert_eq!(state.truck(), 9);
        assert_eq!(state.weights(), &[100]);
        assert_eq!(state.powerups(), &[3]);
        assert_eq!(state.log().len(), 3);
    }

    #[test]
    fn test_apply_powerups_multiplies_and_logs() {
        let state = PuzzleState::new(3, vec![50], vec![2, 3, 5]).apply_powerups(&[2, 5]);
        assert_eq!(state.truck(), 30);
        assert_eq!(state.powerups(), &[3]);
        assert_eq!(
            state.log(),
            &[Operation::Multiply(2), Operation::Multiply(5)]
        );
    }

    #[test]
    fn test_apply_powerups_removes_one_occurrence_per_use() {
        let state = PuzzleState::new(1, vec![50], vec![2, 2, 2]);
        assert_eq!(state.apply_powerups(&[2]).powerups(), &[2, 2]);
        assert_eq!(state.apply_powerups(&[2, 2]).powerups(), &[2]);
        assert_eq!(state.apply_powerups(&[2, 2]).truck(), 4);
    }

    #[test]
    #[should_panic(expected = "not available")]
    fn test_apply_unavailable_powerup_panics() {
        PuzzleState::new(1, vec![50], vec![2]).apply_powerups(&[3]);
    }

    #[test]
    #[should_panic(expected = "not available")]
    fn test_apply_too_many_duplicates_panics() {
        PuzzleState::new(1, vec![50], vec![2]).apply_powerups(&[2, 2]);
    }

    #[test]
    fn test_done_ignores_leftover_powerups() {
        let state = PuzzleState::new(10, vec![], vec![2, 3]);
        assert!(state.is_done());
        assert!(!PuzzleState::new(10, vec![20], vec![]).is_done());
    }

    #[test]
    fn test_transitions_leave_parent_untouched() {
        let parent = PuzzleState::new(3, vec![2, 40], vec![2, 4]);
        let snapshot = parent.clone();
        let _ = parent.greedy().apply_powerups(&[4]).greedy();
        assert_eq!(parent, snapshot);
    }

    #[test]
    fn test_display_dump() {
        let state = PuzzleState::new(2, vec![2_200, 8], vec![10]);
        assert_eq!(
            state.to_string(),
            "truck:    2\nweights:  [8, 2_200]\npowerups: [10]"
        );
    }

    proptest! {
        #[test]
        fn test_greedy_is_idempotent(
            truck in 1u128..1000,
            weights in prop::collection::vec(1u64..500, 0..12),
            powerups in prop::collection::vec(1u64..10, 0..6),
        ) {
            let once = PuzzleState::new(truck, weights, powerups).greedy();
            let twice = once.greedy();
            prop_assert_eq!(once, twice);
        }
    }
}
