//! Selection of the default hash builder.
//!
//! [`DefaultHashBuilder`] is the hash builder used by [`HashedSet::new`]
//! and friends. It is chosen at compile time:
//!
//! | Feature    | Hash builder                        |
//! |------------|-------------------------------------|
//! | (none)     | `std::collections::hash_map::RandomState` |
//! | `ahash`    | `ahash::RandomState`                |
//! | `fxhash`   | `rustc_hash::FxBuildHasher`         |
//!
//! `fxhash` takes precedence when both features are enabled.
//!
//! Any other [`BuildHasher`](std::hash::BuildHasher) can be supplied per set
//! through [`HashedSet::with_hasher`].
//!
//! [`HashedSet::new`]: crate::HashedSet::new
//! [`HashedSet::with_hasher`]: crate::HashedSet::with_hasher

/// The hash builder used when none is given explicitly.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hash builder used when none is given explicitly.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hash builder used when none is given explicitly.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
