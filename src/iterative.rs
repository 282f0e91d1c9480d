use std::ops::RangeBounds;

use crate::LazySegmentTree;
use crate::algebra::{Action, Monoid};
use crate::error::BuildError;
use crate::internal::node_id::{Boundary, NodeId};
use crate::internal::operations::Nodes;
use crate::internal::to_bounds;

/// A lazy segment tree that works bottom-up along the ancestor chains of range boundaries.
///
/// Only the nodes straddling a boundary are pushed down before a range is touched,
/// and merged again afterwards.
///
/// # Examples
///
/// ```
/// use lazy_segment_tree::algebra::{FnAction, FnMonoid};
/// use lazy_segment_tree::{IterativeLazySegmentTree, LazySegmentTree};
///
/// // range minimum with range assignment
/// let min = FnMonoid::new(i32::MAX, |a: &i32, b: &i32| *a.min(b));
/// let assign = FnAction::new(
///     None,
///     |f: &Option<i32>, g: &Option<i32>| f.or(*g),
///     |f: &Option<i32>, x: &i32| f.unwrap_or(*x),
/// );
///
/// let mut tree = IterativeLazySegmentTree::new(min, assign, vec![5, 3, 8, 6]).unwrap();
/// assert_eq!(tree.get(..), 3);
///
/// tree.set(0..2, Some(7));
/// assert_eq!(tree.get(..), 6);
/// assert_eq!(tree.get(0..2), 7);
/// ```
#[derive(Clone)]
pub struct IterativeLazySegmentTree<S: Monoid, F: Action<S>> {
    nodes: Nodes<S, F>,
}

impl<S: Monoid, F: Action<S>> IterativeLazySegmentTree<S, F> {
    /// Builds a tree holding `elements`.
    ///
    /// # Errors
    ///
    /// [`BuildError::Empty`] when `elements` is empty.
    ///
    /// # Time complexity
    ///
    /// *O*(*n*)
    pub fn new(value: S, update: F, elements: Vec<S::Item>) -> Result<Self, BuildError> {
        let nodes = Nodes::build(value, update, elements)?;
        Ok(IterativeLazySegmentTree { nodes })
    }

    /// Same as [`new`](IterativeLazySegmentTree::new), collecting `elements` first.
    pub fn from_iter_with<I>(value: S, update: F, elements: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S::Item>,
    {
        Self::new(value, update, elements.into_iter().collect())
    }

    /// Pushes down every node that straddles `start` or `end`, from the root to the leaves.
    fn propagate_boundaries(&mut self, start: Boundary, end: Boundary) {
        for level in (1..=self.nodes.log()).rev() {
            if !start.is_aligned(level) {
                self.nodes.propagate(start.right_ancestor(level));
            }
            if !end.is_aligned(level) {
                self.nodes.propagate(end.left_ancestor(level));
            }
        }
    }

    /// Merges every node that straddles `start` or `end`, from the leaves to the root.
    fn merge_boundaries(&mut self, start: Boundary, end: Boundary) {
        for level in 1..=self.nodes.log() {
            if !start.is_aligned(level) {
                self.nodes.merge(start.right_ancestor(level));
            }
            if !end.is_aligned(level) {
                self.nodes.merge(end.left_ancestor(level));
            }
        }
    }
}

impl<S: Monoid, F: Action<S>> LazySegmentTree for IterativeLazySegmentTree<S, F> {
    type Value = S::Item;
    type Update = F::Item;

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn all(&self) -> &S::Item {
        self.nodes.get_node(NodeId::ROOT)
    }

    fn set<R: RangeBounds<usize>>(&mut self, range: R, f: F::Item) {
        let (start, end) = to_bounds(range, self.len());
        if start == end {
            return;
        }

        let capacity = self.nodes.capacity();
        let start = Boundary::new(start, capacity);
        let end = Boundary::new(end, capacity);

        self.propagate_boundaries(start, end);

        // apply to the maximal blocks covering the range
        let mut left = start.position();
        let mut right = end.position();
        while left < right {
            if left & 1 == 1 {
                self.nodes.apply(NodeId::new(left), &f);
                left += 1;
            }
            if right & 1 == 1 {
                right -= 1;
                self.nodes.apply(NodeId::new(right), &f);
            }
            left >>= 1;
            right >>= 1;
        }

        self.merge_boundaries(start, end);
    }

    fn get<R: RangeBounds<usize>>(&mut self, range: R) -> S::Item {
        let (start, end) = to_bounds(range, self.len());
        if start == end {
            return self.nodes.value().identity();
        }

        let capacity = self.nodes.capacity();
        let start = Boundary::new(start, capacity);
        let end = Boundary::new(end, capacity);

        self.propagate_boundaries(start, end);

        // `combine` isn't commutative, so accumulate both sides separately
        let value = self.nodes.value();
        let mut left_sum = value.identity();
        let mut right_sum = value.identity();
        let mut left = start.position();
        let mut right = end.position();
        while left < right {
            if left & 1 == 1 {
                left_sum = value.combine(&left_sum, self.nodes.get_node(NodeId::new(left)));
                left += 1;
            }
            if right & 1 == 1 {
                right -= 1;
                right_sum = value.combine(self.nodes.get_node(NodeId::new(right)), &right_sum);
            }
            left >>= 1;
            right >>= 1;
        }

        value.combine(&left_sum, &right_sum)
    }

    fn update(&mut self, index: usize, element: S::Item) {
        assert!(
            index < self.len(),
            "index {index} is out of bounds for length {}",
            self.len()
        );

        let leaf = self.nodes.leaf(index);
        let log = self.nodes.log();
        for level in (1..=log).rev() {
            self.nodes.propagate(leaf.ancestor(level));
        }

        self.nodes.set_leaf_node(leaf, element); // DIRTY: all ancestors of `leaf`

        for level in 1..=log {
            self.nodes.merge(leaf.ancestor(level)); // CLEAN: ancestors of `leaf` up to `level`
        }
    }

    fn to_vec(&mut self) -> Vec<S::Item> {
        self.nodes.flush()
    }
}
