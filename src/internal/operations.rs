//! # Internal operations
//!
//! `Nodes` is the arena shared by both tree variants.
//!
//! Every node satisfies one of the following. ("CLEAN:" tag)
//! * it is a leaf,
//! * its lazy tag is the identity and its value is the combination of its children, or
//! * its value already includes its lazy tag, and its children are waiting for the tag.
//!
//! An internal node becomes dirty when a node below it is modified and it isn't merged yet. ("DIRTY:" tag)
//! Reading or writing below a node requires pushing its lazy tag down first.

use crate::algebra::{Action, Monoid};
use crate::error::BuildError;
use crate::internal::consts;
use crate::internal::node_id::{LeafNodeId, NodeId};

#[derive(Clone)]
pub(crate) struct Nodes<S: Monoid, F: Action<S>> {
    value: S,
    update: F,
    data: Vec<S::Item>,
    lazy: Vec<F::Item>,
    len: usize,
    capacity: usize,
}

// construction
impl<S: Monoid, F: Action<S>> Nodes<S, F> {
    /// Builds the arena from `elements`.
    ///
    /// # Time complexity
    ///
    /// *O*(*n*)
    ///
    /// CLEAN: all nodes
    pub(crate) fn build(value: S, update: F, elements: Vec<S::Item>) -> Result<Self, BuildError> {
        let len = elements.len();
        if len == 0 {
            return Err(BuildError::Empty);
        }
        if len > consts::MAX_LEN {
            return Err(BuildError::TooLong { len });
        }

        let capacity = len.next_power_of_two();

        let mut data = Vec::with_capacity(capacity * 2);
        data.resize_with(capacity, || value.identity());
        data.extend(elements);
        // padding leaves stay the identity forever
        data.resize_with(capacity * 2, || value.identity());

        let lazy = (0..capacity).map(|_| update.identity()).collect();

        let mut nodes = Nodes {
            value,
            update,
            data,
            lazy,
            len,
            capacity,
        };
        for node_index in (1..capacity).rev() {
            nodes.merge(NodeId::new(node_index));
        }

        Ok(nodes)
    }
}

// internal operations: node access
impl<S: Monoid, F: Action<S>> Nodes<S, F> {
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Height of the tree. Leaves are at level 0 and the root is at level `log()`.
    pub(crate) fn log(&self) -> u32 {
        self.capacity.trailing_zeros()
    }

    pub(crate) fn value(&self) -> &S {
        &self.value
    }

    pub(crate) fn get_node(&self, id: NodeId) -> &S::Item {
        &self.data[id.node_index()]
    }

    pub(crate) fn is_internal(&self, id: NodeId) -> bool {
        id.is_internal(self.capacity)
    }

    pub(crate) fn leaf(&self, index: usize) -> LeafNodeId {
        LeafNodeId::new(index, self.capacity)
    }

    /// DIRTY: all ancestors of `id`
    ///
    /// Every ancestor of `id` must have been propagated beforehand.
    pub(crate) fn set_leaf_node(&mut self, id: LeafNodeId, element: S::Item) {
        debug_assert!(id.index() < self.len);

        self.data[id.node_id().node_index()] = element;
    }
}

// internal operations: apply, propagate, merge
impl<S: Monoid, F: Action<S>> Nodes<S, F> {
    /// Maps `f` onto the value of `id`, and stacks it onto the lazy tag when `id` is internal.
    ///
    /// DIRTY: all ancestors of `id`
    pub(crate) fn apply(&mut self, id: NodeId, f: &F::Item) {
        let node_index = id.node_index();
        self.data[node_index] = self.update.map(f, &self.data[node_index]);
        if self.is_internal(id) {
            self.lazy[node_index] = self.update.combine(f, &self.lazy[node_index]);
        }
    }

    /// Pushes the lazy tag of `id` to its children.
    ///
    /// CLEAN: `id`'s lazy tag is the identity
    pub(crate) fn propagate(&mut self, id: NodeId) {
        debug_assert!(self.is_internal(id));

        let f = std::mem::replace(&mut self.lazy[id.node_index()], self.update.identity());
        self.apply(id.left_child(), &f);
        self.apply(id.right_child(), &f);
    }

    /// Recalculates the value of `id` from its children.
    ///
    /// CLEAN: `id`, when its lazy tag is the identity
    pub(crate) fn merge(&mut self, id: NodeId) {
        debug_assert!(self.is_internal(id));

        let merged = self
            .value
            .combine(self.get_node(id.left_child()), self.get_node(id.right_child()));
        self.data[id.node_index()] = merged;
    }
}

// internal operations: bulk
impl<S: Monoid, F: Action<S>> Nodes<S, F> {
    /// Pushes every lazy tag down to the leaves, then returns the elements.
    ///
    /// # Time complexity
    ///
    /// *O*(*n*)
    ///
    /// CLEAN: all nodes, all lazy tags are the identity
    pub(crate) fn flush(&mut self) -> Vec<S::Item> {
        // parents come before their children
        for node_index in 1..self.capacity {
            self.propagate(NodeId::new(node_index));
        }

        self.data[self.capacity..self.capacity + self.len].to_vec()
    }
}
