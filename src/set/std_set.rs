//! [`Set`] for [`std::collections::HashSet`].

use std::collections::HashSet;
use std::collections::hash_set;
use std::hash::{BuildHasher, Hash};

use super::Set;

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> Set<T> for HashSet<T, S> {
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, element: T) {
        Self::insert(self, element);
    }

    fn remove(&mut self, element: &T) {
        Self::remove(self, element);
    }

    fn clear(&mut self) {
        Self::clear(self);
        self.shrink_to_fit();
    }

    fn has(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn values(&self) -> Vec<T> {
        Self::iter(self).cloned().collect()
    }

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn deep_copy(&self) -> Self {
        self.clone()
    }

    fn union(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity_and_hasher(self.len(), self.hasher().clone());
        result.extend(Self::union(self, other).cloned());
        result
    }

    fn intersection(&self, other: &Self) -> Self {
        let mut result = Self::with_hasher(self.hasher().clone());
        result.extend(Self::intersection(self, other).cloned());
        result
    }

    // Symmetric, to match `HashedSet::difference`.
    fn difference(&self, other: &Self) -> Self {
        let mut result = Self::with_hasher(self.hasher().clone());
        result.extend(self.symmetric_difference(other).cloned());
        result
    }

    fn is_subset(&self, other: &Self) -> bool {
        Self::is_subset(self, other)
    }

    fn is_superset(&self, other: &Self) -> bool {
        Self::is_superset(self, other)
    }
}
