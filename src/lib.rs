//! [![github]](https://github.com/duncanlivingston/hawthorn)&ensp;
//! [![crates-io]](https://crates.io/duncanlivingston/hawthorn)&ensp;
//!
//! [github]: https://img.shields.io/badge/github-8da0cb?style=for-the-badge&labelColor=555555&logo=github
//! [crates-io]: https://img.shields.io/badge/crates.io-fc8d62?style=for-the-badge&labelColor=555555&logo=rust
//!
//! ## Introduction
//!
//! This crate implements a variety of collections based on binary trees, in particular red-black
//! trees. Red-black trees are a type of self balancing data structure that keeps its keys in
//! ascending order and guarantees logarithmic time lookup, insertion and removal in the worst
//! case. Balance is kept with a single colour bit per leaf: the tree recolours and locally
//! rotates leaves around an insertion or removal, so no operation ever reorganises more than a
//! short chain of leaves.
//!
//! ## Benefits
//!
//!  The crate complements the standard `std::collection` routines, but provide the following
//! benefits:
//!
//! - Keys stored in the collections do not need to be hashable.
//! - Keys are sorted into an 'ascending' order within the collection by comparing keys pairwise.
//! - The bounds are worst case, not amortised - no lookup or update ever restructures more than
//!   a logarithmic chain of leaves, so there are no occasional slow operations.
//! - The crate is small and `#![no_std]`.
//! - The structure of the tree is stored separately to the keys and values. The tree
//!   reconfigures itself around the stored entries, which do not move as it rebalances, and the
//!   storage of removed entries is recycled for future use.
//! - Maps support removal and in-place value replacement during iteration through a cursor, and
//!   removing or replacing values never disturbs the rest of the walk.
//!
//! The collections are single threaded. Nothing stops a collection moving between threads, but
//! sharing one requires external synchronisation, exactly as for the standard containers.
//!
//! ## Contents
//!
//! The initial release of the `hawthorn` crate includes the following types
//!
//! <center>
//!
//! | Type        | Stores       | Sorts By | Iterator            |
//! |:------------|:-------------|:---------|---------------------|
//! | `Map`       | Key/Value    | Ord      | `MapIterator`       |
//! | `Set`       | Key          | Ord      | `SetIterator`       |
//! | `StringMap` | String/Value | Ord      | `StringMapIterator` |
//! | `StringSet` | String       | Ord      | `StringSetIterator` |
//!
//! </center>
//!
//! `Map` additionally exposes key and value projections (`MapKeyIterator`, `MapValueIterator`)
//! and a mutating cursor (`MapCursor`).
//!
//! The crate exposes an additional type `util::Tree` that provides the foundation of the other
//! types. This can be thought of as a utility that manages a set of `usize` indices into an
//! external vector of data, without storing the vector itself. It is provided to support
//! development of additional collection types.
//!
//! Two further stand-alone structures round out the crate: `UnionFind`, an array-based
//! disjoint-set structure with path compression, and `SegTree`, a flat tree that folds an
//! associative operation over ranges of a fixed length sequence.

#![no_std]
#![warn(missing_docs)]

mod dsu;
mod map;
mod seg;
mod set;
pub mod util;

pub use dsu::*;
pub use map::*;
pub use seg::*;
pub use set::*;
