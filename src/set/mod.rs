//! The set contract and its implementations.
//!
//! This module provides:
//!
//! - [`Set`]: the trait carrying the complete set contract
//! - [`HashedSet`]: a set backed by a `HashMap<T, ()>`
//!
//! [`Set`] is additionally implemented for [`std::collections::HashSet`].
//!
//! # Examples
//!
//! Code written against [`Set`] accepts any implementation:
//!
//! ```rust
//! use myset::{HashedSet, Set};
//! use std::collections::HashSet;
//!
//! fn shared<S: Set<i32>>(left: &S, right: &S) -> usize {
//!     left.intersection(right).len()
//! }
//!
//! let left: HashedSet<i32> = [1, 2, 3].into_iter().collect();
//! let right: HashedSet<i32> = [2, 3, 4].into_iter().collect();
//! assert_eq!(shared(&left, &right), 2);
//!
//! let left: HashSet<i32> = [1, 2, 3].into_iter().collect();
//! let right: HashSet<i32> = [2, 3, 4].into_iter().collect();
//! assert_eq!(shared(&left, &right), 2);
//! ```

mod hashed_set;
mod std_set;

pub use hashed_set::HashedSet;
pub use hashed_set::IntoIter;
pub use hashed_set::Iter;

// =============================================================================
// Set Trait
// =============================================================================

/// An unordered collection of unique elements.
///
/// Every operation is total: adding a present element and removing an absent
/// one are no-ops, and nothing here fails or panics.
///
/// Operations returning a new set ([`deep_copy`](Set::deep_copy),
/// [`union`](Set::union), [`intersection`](Set::intersection),
/// [`difference`](Set::difference)) produce results that own their storage
/// independently of the operands.
///
/// # Laws
///
/// For all sets `a`, `b` and elements `x`:
///
/// ```text
/// a.union(&b).has(&x)        == a.has(&x) || b.has(&x)
/// a.intersection(&b).has(&x) == a.has(&x) && b.has(&x)
/// a.difference(&b).has(&x)   == a.has(&x) != b.has(&x)
/// a.is_superset(&b)          == b.is_subset(&a)
/// ```
pub trait Set<T>: Sized {
    /// Lazy iterator over borrowed elements, in unspecified order.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Adds an element. Adding an element that is already present is a no-op.
    fn add(&mut self, element: T);

    /// Removes an element. Removing an absent element is a no-op.
    fn remove(&mut self, element: &T);

    /// Removes every element and releases the backing storage.
    fn clear(&mut self);

    /// Returns `true` if the set contains an element equal to `element`.
    fn has(&self, element: &T) -> bool;

    /// Returns `true` if the set contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of distinct elements.
    fn len(&self) -> usize;

    /// Returns a snapshot of the elements, in unspecified order.
    ///
    /// The returned vector owns its elements; later mutation of the set does
    /// not affect it.
    fn values(&self) -> Vec<T>;

    /// Returns a lazy iterator over the elements, in unspecified order.
    ///
    /// The iterator borrows the set, so the set cannot be mutated while it
    /// is alive. Dropping it early has no side effects.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns a new set with the same elements and independent storage.
    ///
    /// Elements are duplicated through `Clone`: for handle types such as
    /// `Rc<U>` the copy shares the pointee with the original.
    #[must_use]
    fn deep_copy(&self) -> Self;

    /// Returns the elements present in either set.
    #[must_use]
    fn union(&self, other: &Self) -> Self;

    /// Returns the elements present in both sets.
    #[must_use]
    fn intersection(&self, other: &Self) -> Self;

    /// Returns the **symmetric** difference: the elements present in exactly
    /// one of the two sets.
    ///
    /// Despite the name this is not `self - other`; `{1, 2, 3}.difference({2, 3, 4})`
    /// is `{1, 4}`. [`HashedSet::relative_complement`] computes `self - other`.
    #[must_use]
    fn difference(&self, other: &Self) -> Self;

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// The empty set is a subset of every set.
    fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.has(element))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }
}
