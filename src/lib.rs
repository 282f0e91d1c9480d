//! Lazy segment trees: range updates and range queries over a fixed-size sequence in *O*(log *n*).
//!
//! # Overview
//!
//! A lazy segment tree stores a sequence of values from a [`Monoid`] `S`, and supports:
//! * [`get`]: the combination of all values in a range,
//! * [`set`]: applying an update from an [`Action`] `F` to every value in a range, and
//! * [`update`]: replacing a single value.
//!
//! The algebra is supplied by the caller, so the same tree answers range sums with range additions,
//! range minimums with range assignments, and so on.
//! See [`algebra`] for the laws the algebra has to follow.
//!
//! The crate provides two strategies behind one [`LazySegmentTree`] trait:
//! * [`IterativeLazySegmentTree`] walks the ancestor chains of the range boundaries bottom-up,
//!   and only pushes tags where a node straddles a boundary.
//! * [`RecursiveLazySegmentTree`] descends from the root and pushes tags at every node it enters.
//!
//! They are observationally equivalent: given the same elements and the same calls,
//! every [`get`] returns the same value.
//!
//! # Time complexities
//!
//! * [`get`], [`set`], [`update`]: *O*(log [`len`])
//! * [`all`]: *O*(1)
//! * construction and [`to_vec`]: *O*([`len`])
//!
//! [`get`]: LazySegmentTree::get
//! [`set`]: LazySegmentTree::set
//! [`update`]: LazySegmentTree::update
//! [`all`]: LazySegmentTree::all
//! [`len`]: LazySegmentTree::len
//! [`to_vec`]: LazySegmentTree::to_vec
//!
//! # Encoding Layout
//!
//! Both strategies store nodes in two flat arrays, with no pointers between nodes.
//! `capacity` is the smallest power of two `>= len`.
//!
//! ```text
//!  level: 2 [            1]
//!         1 [    2] [     3]
//!   leaf: 0 [4] [5] [6] [ 7]
//!  index:    0   1   2    3
//! ```
//!
//! * `data[1..2 * capacity]` holds the aggregate of every node, with the root at `1`,
//!   the children of `i` at `2 * i` and `2 * i + 1`, and the value at `index` at `capacity + index`.
//! * `lazy[1..capacity]` holds the update that has been applied to `data[i]`
//!   but not yet to its children.
//!
//! Leaves past `len` hold the identity of `S`, and no update is ever mapped onto them
//! except the identity of `F`.
//!
//! # Examples
//!
//! ```
//! use lazy_segment_tree::algebra::{FnAction, FnMonoid};
//! use lazy_segment_tree::{IterativeLazySegmentTree, LazySegmentTree};
//!
//! // (sum, count) pairs, with "add to every element" updates
//! let sum = FnMonoid::new((0i64, 0i64), |a: &(i64, i64), b: &(i64, i64)| (a.0 + b.0, a.1 + b.1));
//! let add = FnAction::new(
//!     0i64,
//!     |f: &i64, g: &i64| f + g,
//!     |f: &i64, x: &(i64, i64)| (x.0 + f * x.1, x.1),
//! );
//!
//! let elements: Vec<(i64, i64)> = (0..10).map(|i| (i, 1)).collect();
//! let mut tree = IterativeLazySegmentTree::new(sum, add, elements).unwrap();
//! assert_eq!(tree.get(..), (45, 10));
//! assert_eq!(tree.get(0..5), (10, 5));
//!
//! tree.update(5, (10, 1));
//! assert_eq!(tree.get(..), (50, 10));
//!
//! tree.set(2..6, 3);
//! assert_eq!(tree.get(3..10), (56, 7));
//! ```
//!
//! # Concurrency
//!
//! Even [`get`] mutates the tree, since it pushes pending updates down.
//! Share a tree between threads only behind exclusive access such as a `Mutex`.
pub mod algebra;
mod error;
mod internal;
mod iterative;
mod recursive;

pub use crate::algebra::{Action, Monoid};
pub use crate::error::BuildError;
pub use crate::iterative::IterativeLazySegmentTree;
pub use crate::recursive::RecursiveLazySegmentTree;

use std::ops::RangeBounds;

/// The maximum number of elements in a tree.
pub const MAX_LEN: usize = internal::consts::MAX_LEN;

/// Operations shared by both lazy segment tree strategies.
///
/// Ranges are given as any [`RangeBounds`], e.g. `2..6`, `..`, `..=4`.
/// Every operation panics before touching the tree when its range or index is out of bounds.
pub trait LazySegmentTree {
    /// The type of elements and aggregates.
    type Value;
    /// The type of updates.
    type Update;

    /// Returns the number of elements. It never changes after construction.
    fn len(&self) -> usize;

    /// Always `false`, since a tree can't be built from an empty sequence.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the combination of all elements.
    ///
    /// # Time complexity
    ///
    /// *O*(1)
    fn all(&self) -> &Self::Value;

    /// Applies `f` to every element in `range`.
    ///
    /// An empty range leaves the tree untouched.
    ///
    /// # Panics
    ///
    /// When `range` is reversed or its end is greater than [`len`](LazySegmentTree::len).
    ///
    /// # Time complexity
    ///
    /// *O*(log [`len`](LazySegmentTree::len))
    #[doc(alias = "apply_range")]
    fn set<R: RangeBounds<usize>>(&mut self, range: R, f: Self::Update);

    /// Returns the combination of the elements in `range`, in order.
    ///
    /// An empty range gives the identity.
    ///
    /// # Panics
    ///
    /// When `range` is reversed or its end is greater than [`len`](LazySegmentTree::len).
    ///
    /// # Time complexity
    ///
    /// *O*(log [`len`](LazySegmentTree::len))
    #[doc(alias = "prod")]
    fn get<R: RangeBounds<usize>>(&mut self, range: R) -> Self::Value;

    /// Analogous to `elements[index] = element`, discarding any update pending on `index`.
    ///
    /// # Panics
    ///
    /// When `index >= len()`.
    ///
    /// # Time complexity
    ///
    /// *O*(log [`len`](LazySegmentTree::len))
    fn update(&mut self, index: usize, element: Self::Value);

    /// Returns all elements with every update applied.
    ///
    /// # Time complexity
    ///
    /// *O*([`len`](LazySegmentTree::len))
    fn to_vec(&mut self) -> Vec<Self::Value>;
}
