use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use log::debug;

use super::{Iter, Link, Node, NodeArena, NodeId};
use crate::collections::hash::{
    self, DEFAULT_CAP, GROWTH_FACTOR, KeyNotFound, LinearHash, normalize_cap,
};
use crate::collections::traits::HashTable;
use crate::util::fmt::DebugRaw;

const LOAD_FACTOR_NUMERATOR: usize = 3;
const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// A hash table which resolves collisions by chaining: every bucket holds a singly linked list of
/// the entries that hash to it, with the most recently inserted entry at the head.
///
/// The table grows (doubling its bucket count and rehashing every entry) when an insertion finds
/// the load factor at or above 3/4.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the table.
/// - `c`: The length of the chain in the bucket for the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(c)`, `O(n)`* |
/// | `get` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `contains` | `O(c)` |
/// | `clear` | `O(cap)` |
///
/// \* If the table has reached its load factor, `insert` rehashes every entry first.
///
/// Chains are short when keys spread evenly, but with the default [`LinearHash`] keys which are
/// equal modulo the capacity all share a chain.
pub struct ChainedHashTable {
    pub(crate) buckets: Box<[Link]>,
    pub(crate) nodes: NodeArena,
    pub(crate) len: usize,
    pub(crate) hasher: LinearHash,
}

impl ChainedHashTable {
    /// Creates an empty table with the default capacity of 16 and the default hasher.
    pub fn new() -> ChainedHashTable {
        ChainedHashTable::with_cap(DEFAULT_CAP)
    }

    /// Creates an empty table with the provided `cap`acity. A capacity of 0 is replaced by the
    /// default, and a capacity of 1 is raised to [`MIN_CAP`](hash::MIN_CAP).
    pub fn with_cap(cap: usize) -> ChainedHashTable {
        ChainedHashTable::with_cap_and_hasher(cap, LinearHash::default())
    }

    /// Creates an empty table with the default capacity and the provided `hasher`.
    pub fn with_hasher(hasher: LinearHash) -> ChainedHashTable {
        ChainedHashTable::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates an empty table with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: LinearHash) -> ChainedHashTable {
        let cap = normalize_cap(cap);
        ChainedHashTable {
            buckets: empty_buckets(cap),
            nodes: NodeArena::default(),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the table.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets.
    pub fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the ratio of entries to buckets.
    pub fn load_factor(&self) -> f64 {
        hash::load_factor(self.len, self.cap())
    }

    /// Returns the hash function used by this table.
    pub const fn hasher(&self) -> LinearHash {
        self.hasher
    }

    /// Inserts the provided `key`-`value` pair, growing the table first if it has reached its load
    /// factor. If the key was already associated with a value, the value is replaced in place and
    /// the previous one is returned.
    pub fn insert(&mut self, key: i32, value: i32) -> Option<i32> {
        if self.should_grow() {
            self.grow();
        }

        let bucket = self.bucket_for_key(key);

        if let Some(id) = self.find_in_chain(bucket, key) {
            return Some(mem::replace(&mut self.nodes[id].value, value));
        }

        // New entries become the head of the chain.
        let id = self.nodes.alloc(Node {
            key,
            value,
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(id);
        self.len += 1;
        debug_assert_eq!(self.nodes.live(), self.len);
        None
    }

    /// Returns the value associated with `key`.
    pub fn get(&self, key: i32) -> Result<i32, KeyNotFound> {
        let bucket = self.bucket_for_key(key);

        self.find_in_chain(bucket, key)
            .map(|id| self.nodes[id].value)
            .ok_or(KeyNotFound { key })
    }

    /// Removes the entry associated with `key`, returning its value.
    pub fn remove(&mut self, key: i32) -> Result<i32, KeyNotFound> {
        let bucket = self.bucket_for_key(key);
        let mut prev: Link = None;
        let mut current = self.buckets[bucket];

        while let Some(id) = current {
            let node = &self.nodes[id];

            if node.key == key {
                // Splice the node out, pointing its predecessor (or the bucket) at its successor.
                let next = node.next;
                match prev {
                    Some(prev_id) => self.nodes[prev_id].next = next,
                    None => self.buckets[bucket] = next,
                }

                self.len -= 1;
                let removed = self.nodes.release(id);
                debug_assert_eq!(self.nodes.live(), self.len);
                return Ok(removed.value);
            }

            prev = current;
            current = node.next;
        }

        Err(KeyNotFound { key })
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains(&self, key: i32) -> bool {
        self.find_in_chain(self.bucket_for_key(key), key).is_some()
    }

    /// Removes every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        self.buckets = empty_buckets(self.cap());
        self.nodes.clear();
        self.len = 0;
    }

    /// Returns an iterator over all entries, bucket by bucket and from the head of each chain.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl ChainedHashTable {
    /// Determines whether the load factor has reached 3/4, meaning that the table should grow before
    /// inserting.
    pub(crate) fn should_grow(&self) -> bool {
        self.len * LOAD_FACTOR_DENOMINATOR >= self.cap() * LOAD_FACTOR_NUMERATOR
    }

    /// Doubles the number of buckets and rehashes every entry.
    pub(crate) fn grow(&mut self) {
        self.realloc_with_cap(self.cap() * GROWTH_FACTOR);
    }

    /// Replaces the buckets with `new_cap` empty ones and reinserts every entry, in bucket order and
    /// from the head of each chain.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        let fresh = ChainedHashTable::with_cap_and_hasher(new_cap, self.hasher);
        let old = mem::replace(self, fresh);

        debug!(
            "Growing chained table from {} to {} buckets ({} entries)",
            old.cap(), self.cap(), old.len()
        );
        self.nodes.reserve(old.len());

        for (key, value) in old.iter() {
            self.insert(key, value);
        }
    }

    /// Calculates the bucket for `key`.
    pub(crate) fn bucket_for_key(&self, key: i32) -> usize {
        self.hasher.index(key, self.cap())
    }

    /// Walks the chain in `bucket`, returning the node holding `key` if there is one.
    pub(crate) fn find_in_chain(&self, bucket: usize, key: i32) -> Option<NodeId> {
        let mut current = self.buckets[bucket];

        while let Some(id) = current {
            let node = &self.nodes[id];
            if node.key == key {
                return Some(id);
            }
            current = node.next;
        }

        None
    }
}

fn empty_buckets(cap: usize) -> Box<[Link]> {
    vec![None; cap].into_boxed_slice()
}

impl HashTable for ChainedHashTable {
    type Iter<'a> = Iter<'a>;

    fn with_cap_and_hasher(cap: usize, hasher: LinearHash) -> Self {
        ChainedHashTable::with_cap_and_hasher(cap, hasher)
    }

    fn insert(&mut self, key: i32, value: i32) -> Option<i32> {
        ChainedHashTable::insert(self, key, value)
    }

    fn get(&self, key: i32) -> Result<i32, KeyNotFound> {
        ChainedHashTable::get(self, key)
    }

    fn remove(&mut self, key: i32) -> Result<i32, KeyNotFound> {
        ChainedHashTable::remove(self, key)
    }

    fn contains(&self, key: i32) -> bool {
        ChainedHashTable::contains(self, key)
    }

    fn clear(&mut self) {
        ChainedHashTable::clear(self)
    }

    fn reset(&mut self, cap: usize, hasher: LinearHash) {
        *self = ChainedHashTable::with_cap_and_hasher(cap, hasher);
    }

    fn len(&self) -> usize {
        self.len
    }

    fn cap(&self) -> usize {
        ChainedHashTable::cap(self)
    }

    fn load_factor(&self) -> f64 {
        ChainedHashTable::load_factor(self)
    }

    fn hasher(&self) -> LinearHash {
        self.hasher
    }

    fn iter<'a>(&'a self) -> Iter<'a> {
        ChainedHashTable::iter(self)
    }
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        ChainedHashTable::new()
    }
}

impl Extend<(i32, i32)> for ChainedHashTable {
    fn extend<I: IntoIterator<Item = (i32, i32)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl FromIterator<(i32, i32)> for ChainedHashTable {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        let mut table = ChainedHashTable::new();
        table.extend(iter);
        table
    }
}

impl Debug for ChainedHashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets: Vec<DebugRaw> = self.buckets.iter()
            .map(|head| {
                let mut chain = String::new();
                let mut current = *head;
                while let Some(id) = current {
                    let node = &self.nodes[id];
                    if !chain.is_empty() {
                        chain.push_str(" -> ");
                    }
                    chain.push_str(&format!("({}: {})", node.key, node.value));
                    current = node.next;
                }

                if chain.is_empty() {
                    DebugRaw("-".into())
                } else {
                    DebugRaw(chain)
                }
            })
            .collect();

        f.debug_struct("ChainedHashTable")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl Display for ChainedHashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
