//! The linked AVL tree behind [`OrderedSet`][crate::OrderedSet].
//!
//! A tree is a [`Link`]: either empty or an owned [`Node`]. Nodes don't know their parents.
//! Recursive operations take `&mut Link` instead, which is the parent's slot for the subtree, so
//! any subtree can replace its own root. That's all rotations and deletions need.

use std::cmp::Ordering;
use std::mem;

use compare::Compare;
use tracing::trace;

use crate::error::InvariantError;

/// Height of an empty subtree. A leaf has height 0.
pub(crate) const EMPTY_HEIGHT: isize = -1;

/// An owned, possibly empty, subtree.
#[derive(Clone)]
pub(crate) struct Link<T>(pub(crate) Option<Box<Node<T>>>);

impl<T> Default for Link<T> {
    fn default() -> Self {
        Self(None)
    }
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// Edges on the longest path from this node down to a leaf.
    height: isize,
}

/// The four ways to rebalance a subtree whose children differ in height by two. See [the
/// Wikipedia page][wiki] for the terminology.
///
/// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rotation {
    /// The left child's left subtree is too tall.
    Right,
    /// The right child's right subtree is too tall.
    Left,
    /// The left child's right subtree is too tall.
    LeftRight,
    /// The right child's left subtree is too tall.
    RightLeft,
}

impl Rotation {
    /// The rotation that restores the AVL invariant at `node`, or `None` if it already holds.
    /// `node`'s cached height must be current.
    ///
    /// A child with a balance factor of zero only happens after a deletion and needs a single
    /// rotation.
    pub(crate) fn for_node<T>(node: &Node<T>) -> Option<Self> {
        match (node.balance_factor(), node.left(), node.right()) {
            (factor, Some(left), _) if factor < -1 => match left.balance_factor() {
                n if n <= 0 => Some(Self::Right),
                _ => Some(Self::LeftRight),
            },
            (factor, _, Some(right)) if factor > 1 => match right.balance_factor() {
                n if n >= 0 => Some(Self::Left),
                _ => Some(Self::RightLeft),
            },
            _ => None,
        }
    }
}

impl<T> Node<T> {
    fn new_boxed(element: T) -> Box<Self> {
        Box::new(Node {
            element,
            left: Link::default(),
            right: Link::default(),
            height: 0,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.root()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.root()
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = self.left.height().max(self.right.height()) + 1;
    }

    /// Right height minus left height. Negative means left-heavy.
    fn balance_factor(&self) -> isize {
        self.right.height() - self.left.height()
    }
}

impl<T> Link<T> {
    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }

    fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.0.as_deref_mut()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub(crate) fn height(&self) -> isize {
        self.root().map_or(EMPTY_HEIGHT, |n| n.height)
    }

    pub(crate) fn contains<C>(&self, item: &T, cmp: &C) -> bool
    where
        C: Compare<T>,
    {
        match self.root() {
            None => false,
            Some(node) => match cmp.compare(item, &node.element) {
                Ordering::Less => node.left.contains(item, cmp),
                Ordering::Equal => true,
                Ordering::Greater => node.right.contains(item, cmp),
            },
        }
    }

    pub(crate) fn first(&self) -> Option<&T> {
        let node = self.root()?;
        Some(node.left.first().unwrap_or(&node.element))
    }

    pub(crate) fn last(&self) -> Option<&T> {
        let node = self.root()?;
        Some(node.right.last().unwrap_or(&node.element))
    }

    /// Adds `item` as a new leaf unless an equal element is already present. Every subtree on
    /// the way back up is rebalanced. Returns whether anything was added.
    pub(crate) fn insert<C>(&mut self, item: T, cmp: &C) -> bool
    where
        C: Compare<T>,
    {
        let inserted = match self.root_mut() {
            None => {
                self.0 = Some(Node::new_boxed(item));
                return true;
            }
            Some(node) => match cmp.compare(&item, &node.element) {
                Ordering::Less => node.left.insert(item, cmp),
                Ordering::Equal => false,
                Ordering::Greater => node.right.insert(item, cmp),
            },
        };

        if inserted {
            self.balance();
        }
        inserted
    }

    /// Removes the element equal to `item` and returns it. Every subtree on the way back up is
    /// rebalanced.
    pub(crate) fn remove<C>(&mut self, item: &T, cmp: &C) -> Option<T>
    where
        C: Compare<T>,
    {
        let ordering = cmp.compare(item, &self.root()?.element);
        let removed = match ordering {
            Ordering::Less => self.root_mut()?.left.remove(item, cmp),
            Ordering::Equal => self.remove_root(),
            Ordering::Greater => self.root_mut()?.right.remove(item, cmp),
        };

        if removed.is_some() {
            self.balance();
        }
        removed
    }

    /// Removes the smallest element of this subtree.
    pub(crate) fn pop_first(&mut self) -> Option<T> {
        let node = self.root_mut()?;
        let first = if node.left.is_empty() {
            self.remove_root()
        } else {
            node.left.pop_first()
        };
        self.balance();
        first
    }

    /// Removes the largest element of this subtree.
    pub(crate) fn pop_last(&mut self) -> Option<T> {
        let node = self.root_mut()?;
        let last = if node.right.is_empty() {
            self.remove_root()
        } else {
            node.right.pop_last()
        };
        self.balance();
        last
    }

    /// Unlinks the root of this subtree and returns its element. The caller rebalances.
    ///
    /// With two children the root node stays where it is. Its element is swapped for its
    /// in-order successor, which is removed from the right subtree instead.
    fn remove_root(&mut self) -> Option<T> {
        let mut node = self.0.take()?;
        if node.left.is_empty() {
            let Node { element, right, .. } = *node;
            *self = right;
            return Some(element);
        }

        match node.right.pop_first() {
            Some(successor) => {
                let element = mem::replace(&mut node.element, successor);
                self.0 = Some(node);
                Some(element)
            }
            None => {
                let Node { element, left, .. } = *node;
                *self = left;
                Some(element)
            }
        }
    }

    /// Recomputes the root's height and rotates if its children differ in height by two.
    fn balance(&mut self) {
        let Some(root) = self.root_mut() else {
            return;
        };
        root.fix_height();
        if let Some(rotation) = Rotation::for_node(root) {
            trace!(?rotation, "rebalancing subtree");
            self.rotate(rotation);
        }

        if cfg!(debug_assertions) {
            let Some(root) = self.root() else {
                return;
            };
            let left_height = root.left.height();
            let right_height = root.right.height();
            assert_eq!(root.height, left_height.max(right_height) + 1);
            assert!((left_height - right_height).abs() <= 1);
        }
    }

    fn rotate(&mut self, rotation: Rotation) {
        match rotation {
            Rotation::Right => self.rotate_right(),
            Rotation::Left => self.rotate_left(),
            Rotation::LeftRight => {
                if let Some(root) = self.root_mut() {
                    root.left.rotate_left();
                }
                self.rotate_right();
            }
            Rotation::RightLeft => {
                if let Some(root) = self.root_mut() {
                    root.right.rotate_right();
                }
                self.rotate_left();
            }
        }
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically. Without a left child this does nothing.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      old_root               new_root
    ///      /     \                /     \
    ///  new_root   z    rotate ->  x    old_root
    ///   /   \                           /   \
    ///  x     y                         y     z
    /// ```
    fn rotate_right(&mut self) {
        let Some(mut old_root) = self.0.take() else {
            return;
        };
        let Some(mut new_root) = old_root.left.0.take() else {
            self.0 = Some(old_root);
            return;
        };

        old_root.left = mem::take(&mut new_root.right);
        old_root.fix_height();

        new_root.right = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }

    /// Mirror of [`Link::rotate_right`].
    fn rotate_left(&mut self) {
        let Some(mut old_root) = self.0.take() else {
            return;
        };
        let Some(mut new_root) = old_root.right.0.take() else {
            self.0 = Some(old_root);
            return;
        };

        old_root.right = mem::take(&mut new_root.left);
        old_root.fix_height();

        new_root.left = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }

    /// Checks ordering, balance, and cached heights for every node below this link. Returns the
    /// number of nodes.
    pub(crate) fn validate<C>(&self, cmp: &C, depth: usize) -> Result<usize, InvariantError>
    where
        C: Compare<T>,
    {
        let Some(node) = self.root() else {
            return Ok(0);
        };

        let left_count = node.left.validate(cmp, depth + 1)?;
        let right_count = node.right.validate(cmp, depth + 1)?;

        let left_sorted = node
            .left
            .last()
            .map_or(true, |l| cmp.compare(l, &node.element) == Ordering::Less);
        let right_sorted = node
            .right
            .first()
            .map_or(true, |r| cmp.compare(&node.element, r) == Ordering::Less);
        if !(left_sorted && right_sorted) {
            return Err(InvariantError::OutOfOrder { depth });
        }

        let left = node.left.height();
        let right = node.right.height();
        let actual = left.max(right) + 1;
        if node.height != actual {
            return Err(InvariantError::StaleHeight {
                depth,
                cached: node.height,
                actual,
            });
        }
        if (left - right).abs() > 1 {
            return Err(InvariantError::Unbalanced { depth, left, right });
        }

        Ok(left_count + right_count + 1)
    }
}
