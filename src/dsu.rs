//! Implementation of a union-find structure over integer items
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec::Vec;
use core::cell::RefCell;

//-----------------------------------------------------------------------------------------------//

/// A union-find structure over the items `0..count`.
///
/// Every item starts in a singleton set and `unite` merges the sets holding two items. The
/// structure is array-based: an item's entry holds its parent item or, for the representative of
/// a set, the negated size of that set - so a representative is recognised by its entry being at
/// least `count`. Lookups compress the paths they walk, which is interior mutability, so `find`
/// works through a shared reference and takes effectively constant amortised time.
#[derive(Clone)]
pub struct UnionFind {
    item: RefCell<Vec<usize>>,
    sets: usize,
}

impl UnionFind {
    /// Construct a union-find over `count` items, each in its own set
    pub fn new(count: usize) -> UnionFind {
        use alloc::vec;

        UnionFind {
            item: RefCell::new(vec![1_usize.wrapping_neg(); count]),
            sets: count,
        }
    }

    /// Get the number of items
    #[inline]
    pub fn count(&self) -> usize {
        self.item.borrow().len()
    }

    /// Check if there are any items
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Get the number of disjoint sets
    #[inline]
    pub fn sets(&self) -> usize {
        self.sets
    }

    /// Get the representative item of the set holding `u`
    ///
    /// Two items are in the same set exactly when they have the same representative. The walk
    /// to the representative repoints every item it passes directly at it.
    pub fn find(&self, u: usize) -> usize {
        let parent = self.item.borrow()[u];
        if parent >= self.item.borrow().len() {
            return u;
        }

        let root = self.find(parent);
        self.item.borrow_mut()[u] = root;
        root
    }

    /// Check if two items are in the same set
    pub fn same(&self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }

    /// Get the size of the set holding `u`
    pub fn size(&self, u: usize) -> usize {
        let root = self.find(u);
        self.item.borrow()[root].wrapping_neg()
    }

    /// Unite the sets holding `u` and `v`
    ///
    /// Returns `true` if two sets were merged, or `false` if the items were already in the same
    /// set.
    pub fn unite(&mut self, u: usize, v: usize) -> bool {
        let u = self.find(u);
        let v = self.find(v);
        if u == v {
            return false;
        }

        // Hang the smaller set beneath the larger
        let (root, child) = if self.size(u) < self.size(v) {
            (v, u)
        } else {
            (u, v)
        };

        let mut item = self.item.borrow_mut();
        item[root] = item[root].wrapping_add(item[child]);
        item[child] = root;
        self.sets -= 1;
        true
    }
}

//-----------------------------------------------------------------------------------------------//

#[test]
// A very simple test of uniting sets
fn test_dsu_0() {
    let mut dsu = UnionFind::new(8);

    debug_assert_eq!(dsu.count(), 8);
    debug_assert_eq!(dsu.sets(), 8);
    debug_assert_eq!(dsu.size(3), 1);

    debug_assert!(dsu.unite(1, 5));
    debug_assert!(dsu.unite(5, 6));
    debug_assert!(!dsu.unite(6, 1));

    debug_assert!(dsu.same(1, 6));
    debug_assert!(!dsu.same(1, 2));
    debug_assert_eq!(dsu.size(5), 3);
    debug_assert_eq!(dsu.sets(), 6);

    debug_assert!(dsu.unite(0, 2));
    debug_assert!(dsu.unite(2, 4));
    debug_assert!(dsu.unite(4, 1));
    debug_assert_eq!(dsu.size(0), 6);
    debug_assert_eq!(dsu.sets(), 3);
}

#[test]
// A randomised mirror test against a naive relabelling model
fn test_dsu_1() {
    use rand::prelude::*;

    const COUNT: usize = 200;
    const ROUNDS: usize = 2000;

    let mut rng = SmallRng::seed_from_u64(1234567890);

    let mut dsu = UnionFind::new(COUNT);
    let mut label: Vec<usize> = (0..COUNT).collect();

    for _ in 0..ROUNDS {
        let u = rng.random_range(0..COUNT);
        let v = rng.random_range(0..COUNT);

        let merged = dsu.unite(u, v);
        debug_assert_eq!(merged, label[u] != label[v]);

        if merged {
            let (from, to) = (label[v], label[u]);
            for l in label.iter_mut() {
                if *l == from {
                    *l = to;
                }
            }
        }

        let w = rng.random_range(0..COUNT);
        let x = rng.random_range(0..COUNT);
        debug_assert_eq!(dsu.same(w, x), label[w] == label[x]);

        let size = label.iter().filter(|&&l| l == label[w]).count();
        debug_assert_eq!(dsu.size(w), size);
    }

    let mut sets: Vec<usize> = label.clone();
    sets.sort_unstable();
    sets.dedup();
    debug_assert_eq!(dsu.sets(), sets.len());
}
