//! # gather
//!
//! An insertion-ordered collection library providing chained functional
//! transformations over key-value maps.
//!
//! ## Overview
//!
//! The central type is [`Collection<K, V>`], an ordered mapping from unique
//! keys to values. Keys are either explicit (any `Eq` type) or sequential
//! integer indices assigned on construction. Iteration order is insertion
//! order, and every transformation (`map`, `filter`, `group_by`, `zip`, ...)
//! returns a new `Collection`, leaving the receiver untouched. Only the small
//! set of explicitly mutating operations (`push`, `append`, `insert`, `pop`,
//! `shift`) modifies a collection in place.
//!
//! - **Key preservation**: filtering-style operations keep the original key
//!   of each surviving entry instead of renumbering from zero.
//! - **Loose bounds**: the backing store is an association list, so keys only
//!   need `Eq`, not `Hash` or `Ord`.
//! - **Explicit absence**: operations that may find nothing return `Option`,
//!   so "absent" is never conflated with a stored default value.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` implementations that preserve entry
//!   order.
//!
//! ## Example
//!
//! ```rust
//! use gather::Collection;
//!
//! let scores: Collection<usize, i32> = Collection::from(vec![1, 2, 3, 4, 5, 6]);
//!
//! // Filtering preserves the original keys of the survivors.
//! let even = scores.filter(|_, value| value % 2 == 0);
//! assert_eq!(even.all(), vec![(1, 2), (3, 4), (5, 6)]);
//!
//! // Transformations chain without mutating the receiver.
//! let doubled = scores.map(|value| value * 2);
//! assert_eq!(doubled.values().copied().collect::<Vec<_>>(), vec![2, 4, 6, 8, 10, 12]);
//! assert_eq!(scores.len(), 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use gather::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::Collection;
    pub use crate::spread::Spread;
}

pub mod collection;
pub mod iter;
pub mod spread;

mod macros;

#[cfg(feature = "serde")]
mod serde_support;

pub use collection::Collection;
pub use iter::{IntoIter, Iter, Keys, Values};
pub use spread::Spread;
