//! Replay an operation log against a puzzle.
//!
//! Used to check solver output independently of the search: every add must
//! name a remaining weight the truck can carry, every multiply must consume
//! an available powerup, and no weight may be left at the end.

use crate::error::ReplayError;
use crate::puzzle::{Operation, PuzzleConfig};

/// Replay `log` from the puzzle's starting state and return the final truck value
pub fn replay(puzzle: &PuzzleConfig, log: &[Operation]) -> Result<u128, ReplayError> {
    let mut truck = puzzle.start_truck as u128;
    let mut weights = puzzle.weights.clone();
    let mut powerups = puzzle.powerups.clone();

    for (step, op) in log.iter().enumerate() {
        match *op {
            Operation::Add(weight) => {
                let pos = weights
                    .iter()
                    .position(|&w| w == weight)
                    .ok_or(ReplayError::UnknownWeight { step, weight })?;
                if truck <= weight as u128 {
                    return Err(ReplayError::UnreachableWeight {
                        step,
                        weight,
                        truck,
                    });
                }
                weights.swap_remove(pos);
                truck += weight as u128;
            }
            Operation::Multiply(powerup) => {
                let pos = powerups
                    .iter()
                    .position(|&p| p == powerup)
                    .ok_or(ReplayError::UnavailablePowerup { step, powerup })?;
                powerups.swap_remove(pos);
                truck *= powerup as u128;
            }
        }
    }

    if !weights.is_empty() {
        return Err(ReplayError::Unfinished(weights.len()));
    }
    Ok(truck)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_valid_log() {
        let puzzle = PuzzleConfig::new(vec![5, 5], vec![2], 6);
        let log = [
            Operation::Add(5),
            Operation::Multiply(2),
            Operation::Add(5),
        ];
        assert_eq!(replay(&puzzle, &log), Ok(27));
    }

    #[test]
    fn test_replay_rejects_unreachable_weight() {
        let puzzle = PuzzleConfig::new(vec![5], vec![], 5);
        assert_eq!(
            replay(&puzzle, &[Operation::Add(5)]),
            Err(ReplayError::UnreachableWeight {
                step: 0,
                weight: 5,
                truck: 5
            })
        );
    }

    #[test]
    fn test_replay_rejects_reused_powerup() {
        let puzzle = PuzzleConfig::new(vec![50], vec![2], 3);
        let log = [Operation::Multiply(2), Operation::Multiply(2)];
        assert_eq!(
            replay(&puzzle, &log),
            Err(ReplayError::UnavailablePowerup {
                step: 1,
                powerup: 2
            })
        );
    }

    #[test]
    fn test_replay_rejects_unknown_weight_and_unfinished() {
        let puzzle = PuzzleConfig::new(vec![4, 9], vec![], 5);
        assert_eq!(
            replay(&puzzle, &[Operation::Add(3)]),
            Err(ReplayError::UnknownWeight { step: 0, weight: 3 })
        );
        assert_eq!(
            replay(&puzzle, &[Operation::Add(4)]),
            Err(ReplayError::Unfinished(1))
        );
    }

    #[test]
    fn test_replay_allows_leftover_powerups() {
        let puzzle = PuzzleConfig::new(vec![1], vec![7, 8], 2);
        assert_eq!(replay(&puzzle, &[Operation::Add(1)]), Ok(3));
    }
}
