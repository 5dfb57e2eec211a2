//! Implementation of a range-aggregate tree over a fixed length sequence
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::{Bound, RangeBounds};

//-----------------------------------------------------------------------------------------------//

/// A flat binary tree that folds an associative operation over ranges of a sequence.
///
/// The tree holds a fixed number of values. One value can be replaced at a time, and the
/// operation can be folded over any contiguous range, both in logarithmic time. The operation
/// must be associative and `identity` must be its identity value; commutativity is not required,
/// and folds always combine values in sequence order.
///
/// Values are stored in the second half of a flat array of twice the sequence length, with the
/// two children of slot `x` at slots `2x` and `2x + 1`, so no links need to be stored at all.
#[derive(Clone)]
pub struct SegTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    item: Vec<T>,
    identity: T,
    merge: F,
}

impl<T, F> SegTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Construct a tree of `count` values, all set to the identity
    pub fn new(count: usize, identity: T, merge: F) -> SegTree<T, F> {
        use alloc::vec;

        SegTree {
            item: vec![identity.clone(); 2 * count],
            identity,
            merge,
        }
    }

    /// Construct a tree holding the given values
    pub fn with_values(values: &[T], identity: T, merge: F) -> SegTree<T, F> {
        use alloc::vec;

        let count = values.len();
        let mut item = vec![identity.clone(); count];
        item.extend_from_slice(values);

        // Fill the internal slots from the bottom up
        for x in (1..count).rev() {
            item[x] = merge(&item[2 * x], &item[2 * x + 1]);
        }

        SegTree {
            item,
            identity,
            merge,
        }
    }

    /// Get the number of values in the tree
    #[inline]
    pub fn count(&self) -> usize {
        self.item.len() / 2
    }

    /// Check if there are any values in the tree
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item.is_empty()
    }

    /// Get the value at an index
    #[inline]
    pub fn get(&self, index: usize) -> &T {
        &self.item[self.count() + index]
    }

    /// Set the value at an index
    ///
    /// The aggregates on the chain from the value up to the top of the tree are recomputed.
    pub fn set(&mut self, index: usize, value: T) {
        let mut x = self.count() + index;
        self.item[x] = value;

        while x > 1 {
            x /= 2;
            self.item[x] = (self.merge)(&self.item[2 * x], &self.item[2 * x + 1]);
        }
    }

    /// Fold the operation over a range of values
    ///
    /// An empty range folds to the identity. The two ends of the range are gathered separately
    /// so that the values always combine in sequence order.
    pub fn fold<R>(&self, range: R) -> T
    where
        R: RangeBounds<usize>,
    {
        let count = self.count();

        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end + 1,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => count,
        };
        debug_assert!(start <= end && end <= count);

        let (mut il, mut ir) = (count + start, count + end);
        let (mut left, mut right) = (self.identity.clone(), self.identity.clone());

        while il < ir {
            if il & 1 != 0 {
                left = (self.merge)(&left, &self.item[il]);
                il += 1;
            }
            if ir & 1 != 0 {
                ir -= 1;
                right = (self.merge)(&self.item[ir], &right);
            }
            il >>= 1;
            ir >>= 1;
        }

        (self.merge)(&left, &right)
    }
}

//-----------------------------------------------------------------------------------------------//

#[test]
// A very simple test of folding sums
fn test_seg_0() {
    let mut tree = SegTree::with_values(&[5, 3, 8, 1, 4, 7, 9], 0, |a, b| a + b);

    debug_assert_eq!(tree.count(), 7);
    debug_assert_eq!(tree.fold(..), 37);
    debug_assert_eq!(tree.fold(1..4), 12);
    debug_assert_eq!(tree.fold(2..=2), 8);
    debug_assert_eq!(tree.fold(3..3), 0);
    debug_assert_eq!(*tree.get(4), 4);

    tree.set(2, 10);
    debug_assert_eq!(tree.fold(..), 39);
    debug_assert_eq!(tree.fold(1..4), 14);
    debug_assert_eq!(tree.fold(..2), 8);
}

#[test]
// Folds combine values in sequence order even for one-sided ranges
fn test_seg_1() {
    use alloc::string::{String, ToString};

    let values: Vec<String> = ["a", "b", "c", "d", "e", "f"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let tree = SegTree::with_values(&values, String::new(), |a, b| {
        let mut joined = a.clone();
        joined.push_str(b);
        joined
    });

    debug_assert_eq!(tree.fold(..), "abcdef");
    debug_assert_eq!(tree.fold(2..5), "cde");
    debug_assert_eq!(tree.fold(3..), "def");
    debug_assert_eq!(tree.fold(..=1), "ab");
}

#[test]
// A randomised mirror test against naive slice folds
fn test_seg_2() {
    use rand::prelude::*;

    const COUNT: usize = 100;
    const ROUNDS: usize = 2000;

    let mut rng = SmallRng::seed_from_u64(9876543210);

    let mut values: Vec<usize> = (0..COUNT).map(|_| rng.random_range(0..1000)).collect();
    let mut tree = SegTree::with_values(&values, usize::MAX, |a, b| *a.min(b));

    for _ in 0..ROUNDS {
        if rng.random_bool(0.3) {
            let index = rng.random_range(0..COUNT);
            let value = rng.random_range(0..1000);
            values[index] = value;
            tree.set(index, value);
        }

        let start = rng.random_range(0..=COUNT);
        let end = rng.random_range(start..=COUNT);

        let naive = values[start..end].iter().copied().min().unwrap_or(usize::MAX);
        debug_assert_eq!(tree.fold(start..end), naive);
    }
}

#[test]
// An empty tree folds to the identity
fn test_seg_3() {
    let tree: SegTree<usize, _> = SegTree::new(0, 0, |a, b| a + b);

    debug_assert!(tree.is_empty());
    debug_assert_eq!(tree.count(), 0);
    debug_assert_eq!(tree.fold(..), 0);
}
