//! Errors reported by [`OrderedSet`][crate::OrderedSet].

use thiserror::Error;

/// The ways an [`OrderedSet`][crate::OrderedSet] query can fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// The set has no elements, so there is no first or last one.
    #[error("the set is empty")]
    EmptyCollection,
}

/// A broken structural invariant, as found by
/// [`OrderedSet::validate`][crate::OrderedSet::validate].
///
/// The `depth` fields count edges from the root to the offending node.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    /// A node's element doesn't sort strictly between its subtrees.
    #[error("node at depth {depth} is out of order with its subtrees")]
    OutOfOrder {
        /// Depth of the node.
        depth: usize,
    },
    /// A node's children differ in height by more than one.
    #[error("node at depth {depth} has child heights {left} and {right}")]
    Unbalanced {
        /// Depth of the node.
        depth: usize,
        /// Height of the left subtree.
        left: isize,
        /// Height of the right subtree.
        right: isize,
    },
    /// A node's cached height doesn't match its children.
    #[error("node at depth {depth} caches height {cached} but has height {actual}")]
    StaleHeight {
        /// Depth of the node.
        depth: usize,
        /// The height stored in the node.
        cached: isize,
        /// The height computed from its children.
        actual: isize,
    },
    /// The cached element count disagrees with the number of nodes.
    #[error("set caches {cached} elements but holds {actual}")]
    CountMismatch {
        /// The cached count.
        cached: usize,
        /// The number of reachable nodes.
        actual: usize,
    },
}
