//! An ordered set for educational purposes, kept sorted by a comparator the caller supplies and
//! backed by a self-balancing Binary Search Tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! ## AVL trees
//!
//! Inserting already-sorted values into a plain BST builds a linked list. An
//! AVL tree adds a third invariant:
//!
//! 3. For every `Node`, the heights of its two subtrees differ by at most one.
//!
//! After every insert or delete, each `Node` on the path back to the root is
//! checked and, if needed, restored with a rotation. That keeps the height
//! (and so every operation) at `O(lg N)`.
//!
//! ## Comparators
//!
//! "Less" and "greater" above are whatever the set's comparator says. See
//! [`OrderedSet::with_comparator`]; [`OrderedSet::new`] uses the [`Ord`]
//! implementation of the elements.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
mod iter;
mod node;
pub mod set;
#[cfg(test)]
mod test;

pub use compare::{natural, Compare, Natural};
pub use error::{InvariantError, SetError};
pub use iter::{IntoIter, Iter};
pub use set::OrderedSet;
