//! Hash-map backed set.
//!
//! This module provides [`HashedSet`], a mutable set stored as a
//! `HashMap<T, (), S>`: each element is a key, and the unit value marks its
//! presence.
//!
//! - O(1) expected `has`, `add` and `remove`
//! - O(1) `len` and `is_empty`
//! - set algebra in O(n + m)
//!
//! # Examples
//!
//! ```rust
//! use myset::HashedSet;
//!
//! let mut set = HashedSet::new();
//! set.add(1);
//! set.add(2);
//! set.add(2);
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.has(&1));
//!
//! set.remove(&1);
//! set.remove(&42); // absent: no-op
//! assert_eq!(set.len(), 1);
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use myset::HashedSet;
//!
//! let set_a = HashedSet::from_values([1, 2, 3]);
//! let set_b = HashedSet::from_values([2, 3, 4]);
//!
//! let union = set_a.union(&set_b);                   // {1, 2, 3, 4}
//! let intersection = set_a.intersection(&set_b);     // {2, 3}
//! let difference = set_a.difference(&set_b);         // {1, 4} (symmetric)
//! let complement = set_a.relative_complement(&set_b); // {1}
//!
//! assert_eq!(union.len(), 4);
//! assert_eq!(intersection.len(), 2);
//! assert_eq!(difference.len(), 2);
//! assert_eq!(complement.len(), 1);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use static_assertions::assert_impl_all;

use super::Set;
use crate::hasher::DefaultHashBuilder;

// =============================================================================
// HashedSet Definition
// =============================================================================

/// A set backed by a `HashMap` from element to `()`.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `new`                  | O(1)              |
/// | `has`                  | O(1) expected     |
/// | `add`                  | O(1) amortized    |
/// | `remove`               | O(1) expected     |
/// | `clear`                | O(capacity)       |
/// | `len`                  | O(1)              |
/// | `values`               | O(n)              |
/// | `union`                | O(n + m)          |
/// | `intersection`         | O(min(n, m))      |
/// | `difference`           | O(n + m)          |
/// | `is_subset`            | O(n)              |
///
/// # Examples
///
/// ```rust
/// use myset::HashedSet;
///
/// let set = HashedSet::singleton(42);
/// assert!(set.has(&42));
/// assert!(!set.has(&0));
/// ```
///
/// The set cannot be mutated while it is being iterated:
///
/// ```rust,compile_fail
/// use myset::set;
///
/// let mut numbers = set![1, 2, 3];
/// for number in numbers.iter() {
///     numbers.add(number * 10);
/// }
/// ```
#[derive(Clone)]
pub struct HashedSet<T, S = DefaultHashBuilder> {
    elements: HashMap<T, (), S>,
}

assert_impl_all!(HashedSet<i32>: Send, Sync, Clone, Default);
assert_impl_all!(Iter<'static, i32>: ExactSizeIterator, FusedIterator, Clone);
assert_impl_all!(IntoIter<i32>: ExactSizeIterator, FusedIterator);

impl<T> HashedSet<T> {
    /// Creates an empty set using the [`DefaultHashBuilder`].
    ///
    /// No storage is allocated until the first element is added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let set: HashedSet<i32> = HashedSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T: Eq + Hash> HashedSet<T> {
    /// Creates a set from zero or more initial elements.
    ///
    /// Duplicates collapse: the resulting length is the number of distinct
    /// values supplied.
    ///
    /// # Arguments
    ///
    /// * `values` - The initial elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let set = HashedSet::from_values(["a", "b", "a"]);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[must_use]
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().collect()
    }

    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let set = HashedSet::singleton("only");
    /// assert_eq!(set.len(), 1);
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.add(element);
        set
    }
}

impl<T, S> HashedSet<T, S> {
    /// Creates an empty set which will use `hasher` to hash elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let mut set = HashedSet::with_hasher(RandomState::new());
    /// set.add(1);
    /// assert!(set.has(&1));
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_hasher(hasher: S) -> Self {
        Self {
            elements: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements,
    /// using `hasher` to hash elements.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            elements: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let mut set = HashedSet::new();
    /// assert!(set.is_empty());
    ///
    /// set.add(42);
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns a reference to the set's hash builder.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.elements.hasher()
    }

    /// Returns a lazy iterator over the elements, in unspecified order.
    ///
    /// The consumer may stop at any point; nothing is left behind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let set = HashedSet::from_values(1..=100);
    ///
    /// let first_even = set.iter().find(|element| *element % 2 == 0);
    /// assert!(first_even.is_some());
    /// assert_eq!(set.len(), 100);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.elements.keys(),
        }
    }
}

impl<T: Eq + Hash, S: BuildHasher> HashedSet<T, S> {
    /// Adds an element to the set.
    ///
    /// Adding an element that is already present leaves the set unchanged.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    #[inline]
    pub fn add(&mut self, element: T) {
        self.elements.insert(element, ());
    }

    /// Adds an element to the set, reporting whether it was newly added.
    ///
    /// # Returns
    ///
    /// `true` if the element was not present before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let mut set = HashedSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    #[inline]
    pub fn insert(&mut self, element: T) -> bool {
        self.elements.insert(element, ()).is_none()
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let set = HashedSet::from_values(["hello".to_string(), "world".to_string()]);
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.has("hello"));
    /// assert!(!set.has("other"));
    /// ```
    #[inline]
    #[must_use]
    pub fn has<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains_key(element)
    }

    /// Removes an element from the set. Removing an absent element is a no-op.
    #[inline]
    pub fn remove<Q>(&mut self, element: &Q)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.remove(element);
    }

    /// Removes an element from the set, reporting whether it was present.
    #[inline]
    pub fn delete<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.remove(element).is_some()
    }

    /// Removes an element from the set and returns it, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let mut set = HashedSet::from_values(["key".to_string()]);
    /// assert_eq!(set.take("key"), Some("key".to_string()));
    /// assert_eq!(set.take("key"), None);
    /// ```
    #[inline]
    pub fn take<Q>(&mut self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements
            .remove_entry(element)
            .map(|(element, ())| element)
    }

    /// Removes every element and releases the backing storage.
    ///
    /// Unlike `HashMap::clear`, the allocation is returned rather than kept
    /// for reuse, so the capacity afterwards is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let mut set = HashedSet::from_values(0..1000);
    /// set.clear();
    ///
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), 0);
    /// ```
    pub fn clear(&mut self) {
        trace_event!(
            operation = "clear",
            removed = self.elements.len(),
            released_capacity = self.elements.capacity(),
            "cleared set and released storage"
        );
        self.elements.clear();
        self.elements.shrink_to_fit();
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let mut set = HashedSet::from_values(1..=6);
    /// set.retain(|element| element % 2 == 0);
    /// assert_eq!(set, HashedSet::from_values([2, 4, 6]));
    /// ```
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.retain(|element, _| predicate(element));
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// The empty set is a subset of every set, including the empty set.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let subset = HashedSet::from_values([1, 2]);
    /// let superset = HashedSet::from_values([1, 2, 3]);
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// assert!(HashedSet::new().is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.has(element))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    ///
    /// The empty set is a superset of the empty set only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let empty: HashedSet<i32> = HashedSet::new();
    /// let numbers = HashedSet::from_values([1, 2]);
    ///
    /// assert!(numbers.is_superset(&empty));
    /// assert!(!empty.is_superset(&numbers));
    /// assert!(empty.is_superset(&empty));
    /// ```
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = Self::by_size(self, other);
        !smaller.iter().any(|element| larger.has(element))
    }

    fn by_size<'a>(left: &'a Self, right: &'a Self) -> (&'a Self, &'a Self) {
        if left.elements.len() <= right.elements.len() {
            (left, right)
        } else {
            (right, left)
        }
    }
}

impl<T: Clone, S> HashedSet<T, S> {
    /// Returns a snapshot of the elements, in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let mut set = HashedSet::from_values([1, 2, 3]);
    /// let mut snapshot = set.values();
    ///
    /// set.clear();
    ///
    /// snapshot.sort_unstable();
    /// assert_eq!(snapshot, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> HashedSet<T, S> {
    /// Returns a new set with the same elements and independent storage.
    ///
    /// Mutating the copy never affects the original and vice versa.
    /// Elements are duplicated through `Clone`, so handle types such as
    /// `Rc<U>` share their pointee between the two sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let original = HashedSet::from_values([1, 2]);
    /// let mut copy = original.deep_copy();
    /// copy.add(3);
    ///
    /// assert_eq!(original.len(), 2);
    /// assert_eq!(copy.len(), 3);
    /// ```
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Returns the union of two sets.
    ///
    /// The union contains all elements that are in either set.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set to union with
    ///
    /// # Complexity
    ///
    /// O(n + m) where n and m are the sizes of the two sets
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let set_a = HashedSet::from_values([1, 2]);
    /// let set_b = HashedSet::from_values([2, 3]);
    ///
    /// let union = set_a.union(&set_b);
    ///
    /// assert_eq!(union, HashedSet::from_values([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (smaller, larger) = Self::by_size(self, other);
        let mut result = larger.clone();
        result.extend(smaller.iter().cloned());
        trace_event!(
            operation = "union",
            left = self.len(),
            right = other.len(),
            result = result.len(),
            "computed set algebra result"
        );
        result
    }

    /// Returns the intersection of two sets.
    ///
    /// The intersection contains only elements that are in both sets.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let set_a = HashedSet::from_values([1, 2, 3]);
    /// let set_b = HashedSet::from_values([2, 3, 4]);
    ///
    /// assert_eq!(set_a.intersection(&set_b), HashedSet::from_values([2, 3]));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        // Iterate over the smaller set
        let (smaller, larger) = Self::by_size(self, other);

        let mut result = Self::with_capacity_and_hasher(smaller.len(), self.hasher().clone());
        result.extend(
            smaller
                .iter()
                .filter(|element| larger.has(*element))
                .cloned(),
        );
        trace_event!(
            operation = "intersection",
            left = self.len(),
            right = other.len(),
            result = result.len(),
            "computed set algebra result"
        );
        result
    }

    /// Returns the **symmetric** difference of two sets.
    ///
    /// The result holds the elements that are in exactly one of the two sets.
    /// This is the same as [`symmetric_difference`](Self::symmetric_difference);
    /// for the elements of `self` that are not in `other`, use
    /// [`relative_complement`](Self::relative_complement).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let set_a = HashedSet::from_values([1, 2, 3]);
    /// let set_b = HashedSet::from_values([2, 3, 4]);
    ///
    /// // Symmetric: 4 is included even though it only appears in `set_b`
    /// assert_eq!(set_a.difference(&set_b), HashedSet::from_values([1, 4]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.symmetric_difference(other)
    }

    /// Returns the elements that are in either set but not in both.
    ///
    /// # Complexity
    ///
    /// O(n + m)
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.relative_complement(other);
        result.extend(
            other
                .iter()
                .filter(|element| !self.has(*element))
                .cloned(),
        );
        trace_event!(
            operation = "symmetric_difference",
            left = self.len(),
            right = other.len(),
            result = result.len(),
            "computed set algebra result"
        );
        result
    }

    /// Returns the elements of `self` that are not in `other` (`self - other`).
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myset::HashedSet;
    ///
    /// let set_a = HashedSet::from_values([1, 2, 3]);
    /// let set_b = HashedSet::from_values([2, 3, 4]);
    ///
    /// assert_eq!(set_a.relative_complement(&set_b), HashedSet::from_values([1]));
    /// ```
    #[must_use]
    pub fn relative_complement(&self, other: &Self) -> Self {
        let mut result = Self::with_hasher(self.hasher().clone());
        result.extend(
            self.iter()
                .filter(|element| !other.has(*element))
                .cloned(),
        );
        result
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A lazy iterator over the elements of a [`HashedSet`].
///
/// Created by [`HashedSet::iter`].
pub struct Iter<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over the elements of a [`HashedSet`].
///
/// Created by the [`IntoIterator`] implementation of [`HashedSet`].
pub struct IntoIter<T> {
    inner: hash_map::IntoKeys<T, ()>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for HashedSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> FromIterator<T> for HashedSet<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iterator = iter.into_iter();
        let mut set = Self::with_capacity_and_hasher(iterator.size_hint().0, S::default());
        set.extend(iterator);
        set
    }
}

impl<T: Eq + Hash, S: BuildHasher> Extend<T> for HashedSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements
            .extend(iter.into_iter().map(|element| (element, ())));
    }
}

impl<'a, T: Eq + Hash + Copy + 'a, S: BuildHasher> Extend<&'a T> for HashedSet<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for HashedSet<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_values(values)
    }
}

impl<T: Eq + Hash> From<Vec<T>> for HashedSet<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl<T, S> IntoIterator for HashedSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.elements.into_keys(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a HashedSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash, S: BuildHasher> PartialEq for HashedSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for HashedSet<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for HashedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for HashedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> BitOr<&HashedSet<T, S>> for &HashedSet<T, S> {
    type Output = HashedSet<T, S>;

    /// Returns `self.union(rhs)`.
    fn bitor(self, rhs: &HashedSet<T, S>) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> BitAnd<&HashedSet<T, S>> for &HashedSet<T, S> {
    type Output = HashedSet<T, S>;

    /// Returns `self.intersection(rhs)`.
    fn bitand(self, rhs: &HashedSet<T, S>) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> BitXor<&HashedSet<T, S>> for &HashedSet<T, S> {
    type Output = HashedSet<T, S>;

    /// Returns `self.symmetric_difference(rhs)`.
    fn bitxor(self, rhs: &HashedSet<T, S>) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> Sub<&HashedSet<T, S>> for &HashedSet<T, S> {
    type Output = HashedSet<T, S>;

    /// Returns `self.relative_complement(rhs)`.
    fn sub(self, rhs: &HashedSet<T, S>) -> Self::Output {
        self.relative_complement(rhs)
    }
}

// =============================================================================
// Set Implementation
// =============================================================================

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> Set<T> for HashedSet<T, S> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, element: T) {
        Self::add(self, element);
    }

    fn remove(&mut self, element: &T) {
        Self::remove(self, element);
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn has(&self, element: &T) -> bool {
        Self::has(self, element)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn values(&self) -> Vec<T> {
        Self::values(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn deep_copy(&self) -> Self {
        Self::deep_copy(self)
    }

    fn union(&self, other: &Self) -> Self {
        Self::union(self, other)
    }

    fn intersection(&self, other: &Self) -> Self {
        Self::intersection(self, other)
    }

    fn difference(&self, other: &Self) -> Self {
        Self::difference(self, other)
    }

    fn is_subset(&self, other: &Self) -> bool {
        Self::is_subset(self, other)
    }

    fn is_superset(&self, other: &Self) -> bool {
        Self::is_superset(self, other)
    }
}

// =============================================================================
// Tests
// =============================================================================
