//! Non-empty subset enumeration over a powerup multiset.
//!
//! Subsets are numbered `1..2^n`; bit `i` of the mask selects element `i`.
//! Duplicate values are distinct elements, so `[2, 2]` yields `{2}` twice.

use smallvec::SmallVec;

/// Inline storage for one subset; most puzzles use far fewer than 8 powerups per set
pub type Subset = SmallVec<[u64; 8]>;

/// Iterator over every non-empty subset of a slice, low bit first
#[derive(Debug, Clone)]
pub struct NonEmptySubsets<'a> {
    items: &'a [u64],
    mask: u64,
    end: u64,
}

impl<'a> NonEmptySubsets<'a> {
    /// Create an enumerator. Panics on more than 63 elements.
    pub fn new(items: &'a [u64]) -> Self {
        assert!(
            items.len() < u64::BITS as usize,
            "cannot enumerate subsets of {} elements",
            items.len()
        );
        Self {
            items,
            mask: 1,
            end: 1u64 << items.len(),
        }
    }
}

impl Iterator for NonEmptySubsets<'_> {
    type Item = Subset;

    fn next(&mut self) -> Option<Subset> {
        if self.mask >= self.end {
            return None;
        }

        let mut subset = Subset::new();
        let mut bits = self.mask;
        let mut index = 0;
        while bits != 0 {
            if bits & 1 != 0 {
                subset.push(self.items[index]);
            }
            bits >>= 1;
            index += 1;
        }

        self.mask += 1;
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.mask) as usize;
        (remaining, Some(remaining))
    }
}

/// A candidate powerup subset paired with its product.
///
/// Ordering compares the product first, then the values, so a heap of
/// candidates is keyed by product.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PowerupSet {
    pub product: u128,
    pub values: Subset,
}

impl PowerupSet {
    /// Pair a subset with its product. Panics on an empty subset.
    pub fn new(values: Subset) -> Self {
        let product = product(&values);
        Self { product, values }
    }
}

/// Product of a non-empty subset
pub fn product(values: &[u64]) -> u128 {
    assert!(!values.is_empty(), "product of an empty powerup set");
    values.iter().map(|&v| v as u128).product()
}

/// Every non-empty subset of `powerups`, each paired with its product
pub fn powerup_sets(powerups: &[u64]) -> impl Iterator<Item = PowerupSet> + '_ {
    NonEmptySubsets::new(powerups).map(PowerupSet::new)
}
