//! A set ordered by a caller-supplied comparator and backed by an AVL tree.
//!
//! # Examples
//!
//! ```
//! use treeset::{OrderedSet, SetError};
//!
//! let mut set = OrderedSet::new();
//!
//! // Nothing in here yet.
//! assert!(!set.contains(&1));
//! assert_eq!(set.first(), Err(SetError::EmptyCollection));
//!
//! assert!(set.insert(1));
//! assert!(set.contains(&1));
//!
//! // Inserting an equal element again doesn't change the set.
//! assert!(!set.insert(1));
//! assert_eq!(set.len(), 1);
//!
//! assert!(set.remove(&1));
//! assert!(set.is_empty());
//! ```

use std::fmt;
use std::iter::FromIterator;

use compare::{natural, Compare, Natural};
use tracing::trace;

use crate::error::{InvariantError, SetError};
use crate::iter::{IntoIter, Iter};
use crate::node::Link;

/// A set of elements kept in the order given by a comparator.
///
/// Two elements are the same element if the comparator says they're
/// [`Equal`][std::cmp::Ordering::Equal], whether or not they are `==`. The comparator must be a
/// total order. If it isn't, the set stays memory safe but lookups and iteration order are
/// unspecified.
#[derive(Clone)]
pub struct OrderedSet<T, C = Natural<T>> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T> OrderedSet<T>
where
    T: Ord,
{
    /// Creates an empty set ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }
}

impl<T> Default for OrderedSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> OrderedSet<T, C>
where
    C: Compare<T>,
{
    /// Creates an empty set ordered by `cmp`. Any `Fn(&T, &T) -> Ordering` works.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::OrderedSet;
    ///
    /// let mut set = OrderedSet::with_comparator(|a: &String, b: &String| {
    ///     a.to_lowercase().cmp(&b.to_lowercase())
    /// });
    ///
    /// assert!(set.insert("Apple".to_string()));
    /// assert!(!set.insert("APPLE".to_string()));
    /// assert!(set.contains(&"apple".to_string()));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: Link::default(),
            len: 0,
            cmp,
        }
    }

    /// Adds `item` unless the set already holds an element equal to it. Returns whether `item`
    /// was added.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    ///
    /// assert!(set.insert(2));
    /// assert!(!set.insert(2));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        let inserted = self.root.insert(item, &self.cmp);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes the element equal to `item`. Returns whether there was one.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(2);
    ///
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&2));
    /// ```
    pub fn remove(&mut self, item: &T) -> bool {
        self.take(item).is_some()
    }

    /// Removes the element equal to `item` and returns it. The returned element is the one the
    /// set was holding, which may differ from `item` if the comparator ignores some of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::OrderedSet;
    ///
    /// let mut set = OrderedSet::with_comparator(|a: &(i32, &str), b: &(i32, &str)| a.0.cmp(&b.0));
    /// set.insert((1, "one"));
    ///
    /// assert_eq!(set.take(&(1, "uno")), Some((1, "one")));
    /// assert_eq!(set.take(&(1, "uno")), None);
    /// ```
    pub fn take(&mut self, item: &T) -> Option<T> {
        let taken = self.root.remove(item, &self.cmp);
        if taken.is_some() {
            self.len -= 1;
        }
        taken
    }

    /// Whether the set holds an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.root.contains(item, &self.cmp)
    }

    /// Whether `self` and `other` have no elements in common. Each element of `self` is looked
    /// up in `other` using `other`'s comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::OrderedSet;
    ///
    /// let evens: OrderedSet<_> = vec![2, 4, 6].into_iter().collect();
    /// let odds: OrderedSet<_> = vec![1, 3, 5].into_iter().collect();
    /// let primes: OrderedSet<_> = vec![2, 3, 5].into_iter().collect();
    ///
    /// assert!(evens.is_disjoint(&odds));
    /// assert!(!evens.is_disjoint(&primes));
    /// ```
    pub fn is_disjoint<D>(&self, other: &OrderedSet<T, D>) -> bool
    where
        D: Compare<T>,
    {
        self.iter().all(|item| !other.contains(item))
    }

    /// Checks every structural invariant of the tree: ordering under the comparator, AVL
    /// balance, cached heights, and the cached length. This walks the whole tree.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let actual = self.root.validate(&self.cmp, 0)?;
        if actual != self.len {
            return Err(InvariantError::CountMismatch {
                cached: self.len,
                actual,
            });
        }
        Ok(())
    }
}

impl<T, C> OrderedSet<T, C> {
    /// The smallest element under the comparator.
    ///
    /// # Errors
    ///
    /// [`SetError::EmptyCollection`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::{OrderedSet, SetError};
    ///
    /// let mut set = OrderedSet::new();
    /// assert_eq!(set.first(), Err(SetError::EmptyCollection));
    ///
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.first(), Ok(&1));
    /// ```
    pub fn first(&self) -> Result<&T, SetError> {
        self.root.first().ok_or(SetError::EmptyCollection)
    }

    /// The largest element under the comparator.
    ///
    /// # Errors
    ///
    /// [`SetError::EmptyCollection`] if the set is empty.
    pub fn last(&self) -> Result<&T, SetError> {
        self.root.last().ok_or(SetError::EmptyCollection)
    }

    /// Removes and returns the smallest element, if any.
    pub fn pop_first(&mut self) -> Option<T> {
        let first = self.root.pop_first();
        if first.is_some() {
            self.len -= 1;
        }
        first
    }

    /// Removes and returns the largest element, if any.
    pub fn pop_last(&mut self) -> Option<T> {
        let last = self.root.pop_last();
        if last.is_some() {
            self.len -= 1;
        }
        last
    }

    /// The number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of edges on the longest path from the root to a leaf: `0` for a single
    /// element and `-1` for an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert_eq!(set.height(), -1);
    ///
    /// // Ascending inserts would make a plain BST a linked list.
    /// for x in [10, 20, 30] {
    ///     set.insert(x);
    /// }
    /// assert_eq!(set.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        self.root.height()
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        trace!(dropped = self.len, "clearing set");
        self.root = Link::default();
        self.len = 0;
    }

    /// Iterates over the elements in ascending order. Each call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::OrderedSet;
    ///
    /// let set: OrderedSet<_> = vec![5, 3, 8, 1].into_iter().collect();
    ///
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root, self.len)
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for OrderedSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}

impl<T, C> Extend<T> for OrderedSet<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> FromIterator<T> for OrderedSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T, C> fmt::Debug for OrderedSet<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Formats as `OrderedSet([a,b,c])` with the elements in ascending order.
impl<T, C> fmt::Display for OrderedSet<T, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrderedSet([")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("])")
    }
}
