//! Node addressing in the breadth-first arena.
//!
//! With `capacity` leaves, the root is at `1`, children of `i` are `2 * i` and `2 * i + 1`,
//! and the leaf for `index` is at `capacity + index`. Slot `0` is never used.
//!
//! ```text
//!  level: 3 [              1]
//!         2 [      2] [      3]
//!         1 [  4] [  5] [  6] [  7]
//!   leaf: 0 [8] [9] [10][11][12][13][14][15]
//!  index:    0   1   2   3   4   5   6   7
//! ```

#[derive(Copy, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq, Debug))]
pub(crate) struct NodeId {
    node_index: usize,
}

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId { node_index: 1 };

    pub(crate) fn new(node_index: usize) -> Self {
        debug_assert!(node_index >= 1);

        NodeId { node_index }
    }

    pub(crate) fn node_index(&self) -> usize {
        self.node_index
    }

    pub(crate) fn left_child(&self) -> NodeId {
        NodeId {
            node_index: self.node_index * 2,
        }
    }

    pub(crate) fn right_child(&self) -> NodeId {
        NodeId {
            node_index: self.node_index * 2 + 1,
        }
    }

    /// The ancestor `level` levels above. `ancestor(0)` is `self`.
    pub(crate) fn ancestor(&self, level: u32) -> NodeId {
        debug_assert!(self.node_index >> level >= 1);

        NodeId {
            node_index: self.node_index >> level,
        }
    }

    pub(crate) fn is_internal(&self, capacity: usize) -> bool {
        self.node_index < capacity
    }
}

#[derive(Copy, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq, Debug))]
pub(crate) struct LeafNodeId {
    index: usize,
    capacity: usize,
}

impl LeafNodeId {
    pub(crate) fn new(index: usize, capacity: usize) -> Self {
        debug_assert!(index < capacity);

        LeafNodeId { index, capacity }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn node_id(&self) -> NodeId {
        NodeId::new(self.capacity + self.index)
    }

    pub(crate) fn ancestor(&self, level: u32) -> NodeId {
        self.node_id().ancestor(level)
    }
}

/// A position between two adjacent leaves, or before the first / after the last leaf.
///
/// `Boundary::new(index, capacity)` sits right before the leaf for `index`.
#[derive(Copy, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq, Debug))]
pub(crate) struct Boundary {
    position: usize,
}

impl Boundary {
    pub(crate) fn new(index: usize, capacity: usize) -> Self {
        debug_assert!(index <= capacity);

        Boundary {
            position: capacity + index,
        }
    }

    /// Whether no node at `level` straddles this boundary.
    pub(crate) fn is_aligned(&self, level: u32) -> bool {
        (self.position >> level) << level == self.position
    }

    /// The node at `level` that contains the leaf right after this boundary.
    pub(crate) fn right_ancestor(&self, level: u32) -> NodeId {
        NodeId::new(self.position >> level)
    }

    /// The node at `level` that contains the leaf right before this boundary.
    pub(crate) fn left_ancestor(&self, level: u32) -> NodeId {
        NodeId::new((self.position - 1) >> level)
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }
}
