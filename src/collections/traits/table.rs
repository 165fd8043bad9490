use crate::collections::hash::{KeyNotFound, LinearHash};

/// The contract shared by the integer hash tables in this crate, regardless of how they resolve
/// collisions.
///
/// Implementors are expected to grow on their own as entries are inserted, so `insert` is
/// infallible. Lookups and removals of an absent key produce a [`KeyNotFound`], leaving it up to
/// the caller whether that matters.
pub trait HashTable {
    type Iter<'a>: Iterator<Item = (i32, i32)> where Self: 'a;

    /// Creates an empty table with the provided `cap`acity and `hasher`.
    fn with_cap_and_hasher(cap: usize, hasher: LinearHash) -> Self where Self: Sized;

    /// Inserts or overwrites the entry for `key`, returning the previous value if there was one.
    fn insert(&mut self, key: i32, value: i32) -> Option<i32>;

    fn get(&self, key: i32) -> Result<i32, KeyNotFound>;

    /// Removes the entry for `key`, returning its value.
    fn remove(&mut self, key: i32) -> Result<i32, KeyNotFound>;

    fn contains(&self, key: i32) -> bool {
        self.get(key).is_ok()
    }

    /// Drops all entries, keeping the current capacity and hasher.
    fn clear(&mut self);

    /// Replaces the table with an empty one using the provided `cap`acity and `hasher`.
    fn reset(&mut self, cap: usize, hasher: LinearHash);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cap(&self) -> usize;

    /// Returns `len / cap`.
    fn load_factor(&self) -> f64;

    fn hasher(&self) -> LinearHash;

    /// Returns an iterator over all entries, in the order they are persisted.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;
}
