//! In-order iterators over an [`OrderedSet`][crate::OrderedSet].
//!
//! Both iterators keep an explicit stack of the nodes whose left subtrees have been visited but
//! which haven't been yielded yet, so each call to `next` does `O(1)` amortized work.

use std::iter::FusedIterator;
use std::mem;

use crate::node::{Link, Node};

/// A lazy, ascending iterator over borrowed elements of an
/// [`OrderedSet`][crate::OrderedSet]. Created by
/// [`OrderedSet::iter`][crate::OrderedSet::iter].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link.root() {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An ascending iterator that moves elements out of an [`OrderedSet`][crate::OrderedSet].
/// Created by its `into_iter` method.
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link.0 {
            link = mem::take(&mut node.left);
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { element, right, .. } = *node;
        self.push_left(right);
        self.remaining -= 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
