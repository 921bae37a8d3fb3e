//! Candidate generation and the ratio cut.
//!
//! A powerup set is only worth trying at a node if its product exceeds
//! `next_weight / truck`. The comparison is done in integers as
//! `product * truck > next_weight`. This cut is a heuristic: it is not
//! known to keep every solvable branch.

use crate::bounded::BoundedPriorityExt;
use crate::state::PuzzleState;
use crate::subsets::{powerup_sets, PowerupSet};

/// Check whether a set's product beats the weight-to-truck ratio
pub fn exceeds_ratio(product: u128, next_weight: u64, truck: u128) -> bool {
    product * truck > next_weight as u128
}

/// Powerup sets to expand at `state`, in the order they should be tried.
///
/// With `queue_bound > 1` the surviving sets pass through a bounded
/// min-heap keyed by product; otherwise they come out in raw mask order.
/// A state with no remaining weight has no candidates.
pub fn candidates<'a>(
    state: &'a PuzzleState,
    queue_bound: usize,
) -> Box<dyn Iterator<Item = PowerupSet> + 'a> {
    let Some(next_weight) = state.next_weight() else {
        return Box::new(std::iter::empty());
    };
    let truck = state.truck();

    let survivors = powerup_sets(state.powerups())
        .filter(move |set| exceeds_ratio(set.product, next_weight, truck));

    if queue_bound > 1 {
        Box::new(survivors.bounded_priority(queue_bound))
    } else {
        Box::new(survivors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(state: &PuzzleState, bound: usize) -> Vec<u128> {
        candidates(state, bound).map(|set| set.product).collect()
    }

    #[test]
    fn test_exceeds_ratio() {
        // 5 / 11 < 2
        assert!(exceeds_ratio(2, 5, 11));
        // 10 / 3 > 3
        assert!(!exceeds_ratio(3, 10, 3));
        // equality is cut
        assert!(!exceeds_ratio(2, 10, 5));
    }

    #[test]
    fn test_cut_drops_small_products() {
        // ratio 10 / 3 cuts {2} and {3}; the rest stay in mask order
        let state = PuzzleState::new(3, vec![10], vec![2, 3, 5]);
        assert_eq!(products(&state, 0), vec![6, 5, 10, 15, 30]);
    }

    #[test]
    fn test_queue_orders_by_ascending_product() {
        let state = PuzzleState::new(3, vec![10], vec![2, 3, 5]);
        assert_eq!(products(&state, 511), vec![5, 6, 10, 15, 30]);
    }

    #[test]
    fn test_bound_one_is_raw_order() {
        let state = PuzzleState::new(1, vec![1], vec![3, 2]);
        // powerups sorted to [2, 3]; masks give {2}, {3}, {2, 3}
        assert_eq!(products(&state, 1), vec![2, 3, 6]);
    }

    #[test]
    fn test_no_candidates_without_powerups_or_weights() {
        assert_eq!(products(&PuzzleState::new(1, vec![100], vec![]), 511), vec![]);
        assert_eq!(products(&PuzzleState::new(1, vec![], vec![2]), 511), vec![]);
    }
}
