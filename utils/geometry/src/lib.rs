#![no_std]
//! Geometry value types for the `arbor` layout system.
//!
//! [`Point`], [`Size`] and [`Rect`] are plain `Copy` values: no identity, no
//! interior mutability, safe to share between threads without synchronization.
//! Every operation is total; NaN and infinities propagate under IEEE-754 rules
//! and it is up to layout to reject non-finite results.
//!
//! # Using sizes as cache keys
//!
//! `Size` implements `Hash + Eq`, so it works with any map. When the cache is
//! persisted or shared between builds, pass the stable hash function
//! explicitly:
//!
//! ```
//! use arbor_geometry::{Size, SizeMap};
//!
//! let mut measured: SizeMap<u32> = SizeMap::default();
//! measured.insert(Size::new(320.0, 480.0), 3);
//! assert_eq!(measured.get(&Size::new(320.0, 480.0)), Some(&3));
//! ```

#[cfg(feature = "std")]
extern crate std;

pub mod hash;
mod point;
mod rect;
mod size;

pub use hash::{BuildStableHasher, StableHasher};
pub use point::Point;
pub use rect::Rect;
pub use size::Size;

/// Hash map keyed on [`Size`] using [`StableHasher`].
#[cfg(feature = "std")]
pub type SizeMap<V> = std::collections::HashMap<Size, V, BuildStableHasher>;
