//! Integer hash tables and the pieces they share.
//!
//! Two collision strategies are provided behind the same [`HashTable`] contract:
//! - [`ChainedHashTable`], where every bucket heads a singly linked chain of entries.
//! - [`OpenAddressHashTable`], a flat array of slots probed with double hashing, leaving
//!   tombstones behind on removal.
//!
//! Both hash with a [`LinearHash`], which is stored per table and written alongside the entries
//! when a table is persisted.

mod error;
mod function;

#[cfg(feature = "chained")]
pub mod chained;
#[cfg(feature = "open")]
pub mod open;

pub use error::*;
pub use function::*;

#[doc(inline)]
pub use crate::collections::traits::HashTable;

#[cfg(feature = "chained")]
#[doc(inline)]
pub use chained::ChainedHashTable;
#[cfg(feature = "open")]
#[doc(inline)]
pub use open::OpenAddressHashTable;

/// The capacity used when none (or zero) is requested.
pub const DEFAULT_CAP: usize = 16;

/// The smallest capacity a table will allocate. Double hashing needs `cap - 1 > 0`.
pub const MIN_CAP: usize = 2;

/// The factor by which a table grows on resize.
pub(crate) const GROWTH_FACTOR: usize = 2;

/// Applies the default and minimum to a requested capacity.
pub(crate) const fn normalize_cap(cap: usize) -> usize {
    match cap {
        0 => DEFAULT_CAP,
        c if c < MIN_CAP => MIN_CAP,
        c => c,
    }
}

/// Applies [`normalize_cap`] to a signed capacity, as read from a file. Non-positive values fall
/// back to the default.
pub(crate) fn normalize_signed_cap(cap: i64) -> usize {
    match usize::try_from(cap) {
        Ok(c) => normalize_cap(c),
        Err(_) => DEFAULT_CAP,
    }
}

/// Computes `len / cap` as a float.
pub(crate) fn load_factor(len: usize, cap: usize) -> f64 {
    len as f64 / cap as f64
}
