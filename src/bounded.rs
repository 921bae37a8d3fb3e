//! Bounded priority selection over a lazy candidate stream.
//!
//! Holds at most `bound` items in a min-heap. Once the heap is full, each
//! incoming item first evicts (and yields) the current minimum. When the
//! input runs out the heap drains in ascending order. With a bound at least
//! as large as the input, the output is fully sorted; otherwise it is only
//! sorted among the drained tail.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Iterator adapter produced by [`BoundedPriorityExt::bounded_priority`]
pub struct BoundedPriority<I: Iterator> {
    inner: I,
    heap: BinaryHeap<Reverse<I::Item>>,
    bound: usize,
    exhausted: bool,
}

impl<I: Iterator> BoundedPriority<I>
where
    I::Item: Ord,
{
    /// Panics if `bound` is zero.
    pub fn new(inner: I, bound: usize) -> Self {
        assert!(bound > 0, "priority queue bound must be positive");
        Self {
            inner,
            heap: BinaryHeap::with_capacity(bound),
            bound,
            exhausted: false,
        }
    }
}

impl<I: Iterator> Iterator for BoundedPriority<I>
where
    I::Item: Ord,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while !self.exhausted {
            match self.inner.next() {
                Some(item) => {
                    if self.heap.len() >= self.bound {
                        let evicted = self.heap.pop();
                        self.heap.push(Reverse(item));
                        return evicted.map(|Reverse(e)| e);
                    }
                    self.heap.push(Reverse(item));
                }
                None => self.exhausted = true,
            }
        }
        self.heap.pop().map(|Reverse(e)| e)
    }
}

pub trait BoundedPriorityExt: Iterator + Sized
where
    Self::Item: Ord,
{
    /// Reorder this iterator through a min-heap holding at most `bound` items.
    fn bounded_priority(self, bound: usize) -> BoundedPriority<Self> {
        BoundedPriority::new(self, bound)
    }
}

impl<I: Iterator> BoundedPriorityExt for I where I::Item: Ord {}
