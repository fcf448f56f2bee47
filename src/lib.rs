//! # myset
//!
//! A generic set container with mathematical set semantics, backed by a
//! hash map from element to a unit presence marker.
//!
//! ## Overview
//!
//! - [`Set`]: the full set contract (membership, mutation, iteration and
//!   set algebra) as a single trait
//! - [`HashedSet`]: the hash-map backed implementation
//! - [`set!`]: construct a [`HashedSet`] from zero or more elements
//!
//! `Set` is also implemented for [`std::collections::HashSet`], so code that
//! is generic over [`Set`] works with either container.
//!
//! ## Difference is symmetric
//!
//! [`Set::difference`] returns the **symmetric difference**: the elements
//! present in exactly one of the two operands. Use
//! [`HashedSet::relative_complement`] for `A - B`.
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `rustc_hash::FxBuildHasher` as the default hash builder
//! - `ahash`: use `ahash::RandomState` as the default hash builder
//! - `tracing`: emit TRACE-level `tracing` events for storage-level operations
//!
//! ## Example
//!
//! ```rust
//! use myset::prelude::*;
//!
//! let left = set![1, 2, 3];
//! let right = set![2, 3, 4];
//!
//! assert_eq!(left.union(&right), set![1, 2, 3, 4]);
//! assert_eq!(left.intersection(&right), set![2, 3]);
//! assert_eq!(left.difference(&right), set![1, 4]);
//! assert!(!left.is_subset(&right));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Emits a TRACE-level event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($argument)*);
    };
}

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use myset::prelude::*;
///
/// let mut set: HashedSet<&str> = HashedSet::new();
/// set.add("alpha");
/// assert!(set.has(&"alpha"));
/// ```
pub mod prelude {
    pub use crate::hasher::DefaultHashBuilder;
    pub use crate::set;
    pub use crate::set::{HashedSet, Set};
}

pub mod hasher;
pub mod set;

pub use hasher::DefaultHashBuilder;
pub use set::{HashedSet, Set};

/// Creates a [`HashedSet`] containing the given elements.
///
/// Duplicate elements collapse into one.
///
/// # Examples
///
/// ```rust
/// use myset::{HashedSet, set};
///
/// let empty: HashedSet<i32> = set![];
/// assert!(empty.is_empty());
///
/// let numbers = set![1, 2, 2, 3];
/// assert_eq!(numbers.len(), 3);
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::HashedSet::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::HashedSet::from_values([$($element),+])
    };
}
