use std::ops::RangeBounds;

use crate::LazySegmentTree;
use crate::algebra::{Action, Monoid};
use crate::error::BuildError;
use crate::internal::node_id::NodeId;
use crate::internal::operations::Nodes;
use crate::internal::to_bounds;

/// A node and the half-open range of leaves `start..end` it covers.
#[derive(Copy, Clone)]
struct Segment {
    id: NodeId,
    start: usize,
    end: usize,
}

impl Segment {
    fn root(capacity: usize) -> Self {
        Segment {
            id: NodeId::ROOT,
            start: 0,
            end: capacity,
        }
    }

    fn children(&self) -> (Segment, Segment) {
        let mid = (self.start + self.end) / 2;
        let left = Segment {
            id: self.id.left_child(),
            start: self.start,
            end: mid,
        };
        let right = Segment {
            id: self.id.right_child(),
            start: mid,
            end: self.end,
        };
        (left, right)
    }

    fn is_disjoint(&self, start: usize, end: usize) -> bool {
        self.end <= start || end <= self.start
    }

    fn is_covered_by(&self, start: usize, end: usize) -> bool {
        start <= self.start && self.end <= end
    }
}

/// A lazy segment tree that works top-down from the root.
///
/// Every internal node pushes its lazy tag down as soon as the descent enters it,
/// whether or not the node overlaps the range.
/// The recursion is at most log2(`capacity`) deep.
///
/// # Examples
///
/// ```
/// use lazy_segment_tree::algebra::{FnAction, FnMonoid};
/// use lazy_segment_tree::{LazySegmentTree, RecursiveLazySegmentTree};
///
/// // string concatenation, with updates that uppercase or keep every character
/// let concat = FnMonoid::new(String::new(), |a: &String, b: &String| format!("{a}{b}"));
/// let upper = FnAction::new(
///     false,
///     |f: &bool, g: &bool| *f || *g,
///     |f: &bool, x: &String| if *f { x.to_uppercase() } else { x.clone() },
/// );
///
/// let letters = "lazy".chars().map(String::from);
/// let mut tree = RecursiveLazySegmentTree::from_iter_with(concat, upper, letters).unwrap();
///
/// tree.set(1..3, true);
/// assert_eq!(tree.get(..), "lAZy");
/// assert_eq!(tree.get(2..), "Zy");
/// ```
#[derive(Clone)]
pub struct RecursiveLazySegmentTree<S: Monoid, F: Action<S>> {
    nodes: Nodes<S, F>,
}

impl<S: Monoid, F: Action<S>> RecursiveLazySegmentTree<S, F> {
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
        Ok(RecursiveLazySegmentTree { nodes })
    }

    /// Same as [`new`](RecursiveLazySegmentTree::new), collecting `elements` first.
    pub fn from_iter_with<I>(value: S, update: F, elements: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S::Item>,
    {
        Self::new(value, update, elements.into_iter().collect())
    }

    fn root(&self) -> Segment {
        Segment::root(self.nodes.capacity())
    }

    /// Pushes the lazy tag of `segment` down when it has children.
    fn enter(&mut self, segment: Segment) {
        if self.nodes.is_internal(segment.id) {
            self.nodes.propagate(segment.id);
        }
    }

    /// CLEAN: `segment`, with `f` applied to the leaves in `start..end`
    fn set_in(&mut self, segment: Segment, start: usize, end: usize, f: &F::Item) {
        self.enter(segment);

        if segment.is_disjoint(start, end) {
            return;
        }

        if segment.is_covered_by(start, end) {
            self.nodes.apply(segment.id, f);
            // keep the children in step with `segment` right away
            self.enter(segment);
            return;
        }

        // a partial overlap always has children
        let (left, right) = segment.children();
        self.set_in(left, start, end, f);
        self.set_in(right, start, end, f);
        self.nodes.merge(segment.id);
    }

    /// CLEAN: `segment`
    fn get_in(&mut self, segment: Segment, start: usize, end: usize) -> S::Item {
        self.enter(segment);

        if segment.is_disjoint(start, end) {
            return self.nodes.value().identity();
        }

        if segment.is_covered_by(start, end) {
            return self.nodes.get_node(segment.id).clone();
        }

        let (left, right) = segment.children();
        let left_sum = self.get_in(left, start, end);
        let right_sum = self.get_in(right, start, end);
        self.nodes.merge(segment.id);

        self.nodes.value().combine(&left_sum, &right_sum)
    }

    /// CLEAN: `segment`, with the leaf for `index` replaced by `element`
    fn update_in(&mut self, segment: Segment, index: usize, element: S::Item) {
        if !self.nodes.is_internal(segment.id) {
            let leaf = self.nodes.leaf(index);
            self.nodes.set_leaf_node(leaf, element); // DIRTY: all ancestors of `leaf`
            return;
        }

        self.nodes.propagate(segment.id);

        let (left, right) = segment.children();
        if index < left.end {
            self.update_in(left, index, element);
        } else {
            self.update_in(right, index, element);
        }
        self.nodes.merge(segment.id);
    }
}

impl<S: Monoid, F: Action<S>> LazySegmentTree for RecursiveLazySegmentTree<S, F> {
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

        self.set_in(self.root(), start, end, &f);
    }

    fn get<R: RangeBounds<usize>>(&mut self, range: R) -> S::Item {
        let (start, end) = to_bounds(range, self.len());
        if start == end {
            return self.nodes.value().identity();
        }

        self.get_in(self.root(), start, end)
    }

    fn update(&mut self, index: usize, element: S::Item) {
        assert!(
            index < self.len(),
            "index {index} is out of bounds for length {}",
            self.len()
        );

        self.update_in(self.root(), index, element);
    }

    fn to_vec(&mut self) -> Vec<S::Item> {
        self.nodes.flush()
    }
}
