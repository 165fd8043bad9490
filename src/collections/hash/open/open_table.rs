use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use log::{debug, warn};

use super::{Iter, Probe, Slot};
use crate::collections::hash::{
    self, DEFAULT_CAP, GROWTH_FACTOR, KeyNotFound, LinearHash, normalize_cap,
};
use crate::collections::traits::HashTable;
use crate::util::fmt::DebugRaw;

const LOAD_FACTOR_NUMERATOR: usize = 7;
const LOAD_FACTOR_DENOMINATOR: usize = 10;

/// A hash table which stores entries directly in a flat array of slots, resolving collisions
/// with double hashing. The `i`th slot examined for a key is `(h1(key) + i * h2(key)) mod cap`,
/// where `h1` is the table's [`LinearHash`] and `h2(key) = 1 + key mod (cap - 1)`.
///
/// Removal leaves a tombstone rather than emptying the slot, so that keys which probed past it
/// can still be found. Tombstones are reused by insertion and dropped entirely on resize.
///
/// The table grows when an insertion finds the load factor at or above 7/10, lower than
/// [`ChainedHashTable`](crate::collections::hash::ChainedHashTable) because clustering hurts
/// probing much sooner than it hurts chaining. It also grows if a key's probe sequence visits
/// only slots held by other keys, which can happen when the step shares a factor with the
/// capacity.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the table.
/// - `p`: The length of the probe sequence for the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(p)`, `O(n)`* |
/// | `get` | `O(p)` |
/// | `remove` | `O(p)` |
/// | `contains` | `O(p)` |
/// | `clear` | `O(cap)` |
///
/// \* If the table has reached its load factor, `insert` rehashes every entry first.
pub struct OpenAddressHashTable {
    pub(crate) slots: Box<[Slot]>,
    pub(crate) len: usize,
    pub(crate) tombstones: usize,
    pub(crate) hasher: LinearHash,
}

impl OpenAddressHashTable {
    /// Creates an empty table with the default capacity of 16 and the default hasher.
    pub fn new() -> OpenAddressHashTable {
        OpenAddressHashTable::with_cap(DEFAULT_CAP)
    }

    /// Creates an empty table with the provided `cap`acity. A capacity of 0 is replaced by the
    /// default, and a capacity of 1 is raised to [`MIN_CAP`](hash::MIN_CAP) so that the probe
    /// step is always defined.
    pub fn with_cap(cap: usize) -> OpenAddressHashTable {
        OpenAddressHashTable::with_cap_and_hasher(cap, LinearHash::default())
    }

    /// Creates an empty table with the default capacity and the provided `hasher`.
    pub fn with_hasher(hasher: LinearHash) -> OpenAddressHashTable {
        OpenAddressHashTable::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates an empty table with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: LinearHash) -> OpenAddressHashTable {
        OpenAddressHashTable {
            slots: empty_slots(normalize_cap(cap)),
            len: 0,
            tombstones: 0,
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

    /// Returns the number of slots.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns the ratio of entries to slots. Tombstones don't count towards the load.
    pub fn load_factor(&self) -> f64 {
        hash::load_factor(self.len, self.cap())
    }

    /// Returns the number of slots currently holding a tombstone.
    pub const fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Returns the hash function used by this table.
    pub const fn hasher(&self) -> LinearHash {
        self.hasher
    }

    /// Inserts the provided `key`-`value` pair, growing the table first if it has reached its load
    /// factor. If the key was already associated with a value, the value is replaced in place and
    /// the previous one is returned.
    ///
    /// A new key takes the first empty or deleted slot in its probe sequence, but only once the
    /// sequence has been checked for an existing copy of the key.
    pub fn insert(&mut self, key: i32, value: i32) -> Option<i32> {
        if self.should_grow() {
            self.grow();
        }

        loop {
            match self.probe_for_insert(key) {
                Probe::Found(index, previous) => {
                    self.slots[index] = Slot::Occupied { key, value };
                    return Some(previous);
                },
                Probe::Vacant(index) => {
                    if self.slots[index].is_deleted() {
                        self.tombstones -= 1;
                    }
                    self.slots[index] = Slot::Occupied { key, value };
                    self.len += 1;
                    return None;
                },
                Probe::Exhausted => {
                    warn!(
                        "Probe sequence for key {key} exhausted at capacity {} ({} entries)",
                        self.cap(), self.len
                    );
                    self.grow();
                },
            }
        }
    }

    /// Returns the value associated with `key`.
    pub fn get(&self, key: i32) -> Result<i32, KeyNotFound> {
        self.find_occupied(key)
            .and_then(|index| self.slots[index].entry())
            .map(|(_, value)| value)
            .ok_or(KeyNotFound { key })
    }

    /// Removes the entry associated with `key`, returning its value. The slot is left as a
    /// tombstone.
    pub fn remove(&mut self, key: i32) -> Result<i32, KeyNotFound> {
        let index = self.find_occupied(key).ok_or(KeyNotFound { key })?;
        let Slot::Occupied { value, .. } = self.slots[index] else {
            return Err(KeyNotFound { key });
        };

        self.slots[index] = Slot::Deleted;
        self.len -= 1;
        self.tombstones += 1;
        Ok(value)
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains(&self, key: i32) -> bool {
        self.find_occupied(key).is_some()
    }

    /// Removes every entry and tombstone, keeping the current capacity.
    pub fn clear(&mut self) {
        self.slots = empty_slots(self.cap());
        self.len = 0;
        self.tombstones = 0;
    }

    /// Returns an iterator over all entries in ascending slot order.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl OpenAddressHashTable {
    /// Determines whether the load factor has reached 7/10, meaning that the table should grow
    /// before inserting.
    pub(crate) fn should_grow(&self) -> bool {
        self.len * LOAD_FACTOR_DENOMINATOR >= self.cap() * LOAD_FACTOR_NUMERATOR
    }

    /// Doubles the number of slots and rehashes every entry, dropping all tombstones.
    pub(crate) fn grow(&mut self) {
        self.realloc_with_cap(self.cap() * GROWTH_FACTOR);
    }

    /// Replaces the slots with `new_cap` empty ones and reinserts every entry in ascending slot
    /// order.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        let fresh = OpenAddressHashTable::with_cap_and_hasher(new_cap, self.hasher);
        let old = mem::replace(self, fresh);

        debug!(
            "Growing open address table from {} to {} slots ({} entries, {} tombstones dropped)",
            old.cap(), self.cap(), old.len, old.tombstones
        );

        for (key, value) in old.iter() {
            self.insert(key, value);
        }
    }

    /// Walks the probe sequence of `key`, stopping at the first empty slot or a slot holding the
    /// key. The first tombstone passed along the way is remembered so that it can be reused.
    pub(crate) fn probe_for_insert(&self, key: i32) -> Probe {
        let cap = self.cap();
        let mut reusable = None;

        for attempt in 0..cap {
            let index = self.hasher.probe(key, attempt, cap);

            match self.slots[index] {
                Slot::Empty => return Probe::Vacant(reusable.unwrap_or(index)),
                Slot::Deleted => {
                    reusable.get_or_insert(index);
                },
                Slot::Occupied { key: existing, value } if existing == key => {
                    return Probe::Found(index, value);
                },
                Slot::Occupied { .. } => (),
            }
        }

        match reusable {
            Some(index) => Probe::Vacant(index),
            None => Probe::Exhausted,
        }
    }

    /// Finds the index of the occupied slot holding `key`. An empty slot ends the search, because
    /// insertion would have stopped there too. Tombstones don't.
    pub(crate) fn find_occupied(&self, key: i32) -> Option<usize> {
        let cap = self.cap();

        for attempt in 0..cap {
            let index = self.hasher.probe(key, attempt, cap);

            match self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied { key: existing, .. } if existing == key => return Some(index),
                Slot::Occupied { .. } | Slot::Deleted => (),
            }
        }

        None
    }
}

fn empty_slots(cap: usize) -> Box<[Slot]> {
    vec![Slot::Empty; cap].into_boxed_slice()
}

impl HashTable for OpenAddressHashTable {
    type Iter<'a> = Iter<'a>;

    fn with_cap_and_hasher(cap: usize, hasher: LinearHash) -> Self {
        OpenAddressHashTable::with_cap_and_hasher(cap, hasher)
    }

    fn insert(&mut self, key: i32, value: i32) -> Option<i32> {
        OpenAddressHashTable::insert(self, key, value)
    }

    fn get(&self, key: i32) -> Result<i32, KeyNotFound> {
        OpenAddressHashTable::get(self, key)
    }

    fn remove(&mut self, key: i32) -> Result<i32, KeyNotFound> {
        OpenAddressHashTable::remove(self, key)
    }

    fn contains(&self, key: i32) -> bool {
        OpenAddressHashTable::contains(self, key)
    }

    fn clear(&mut self) {
        OpenAddressHashTable::clear(self)
    }

    fn reset(&mut self, cap: usize, hasher: LinearHash) {
        *self = OpenAddressHashTable::with_cap_and_hasher(cap, hasher);
    }

    fn len(&self) -> usize {
        self.len
    }

    fn cap(&self) -> usize {
        OpenAddressHashTable::cap(self)
    }

    fn load_factor(&self) -> f64 {
        OpenAddressHashTable::load_factor(self)
    }

    fn hasher(&self) -> LinearHash {
        self.hasher
    }

    fn iter<'a>(&'a self) -> Iter<'a> {
        OpenAddressHashTable::iter(self)
    }
}

impl Default for OpenAddressHashTable {
    fn default() -> Self {
        OpenAddressHashTable::new()
    }
}

impl Extend<(i32, i32)> for OpenAddressHashTable {
    fn extend<I: IntoIterator<Item = (i32, i32)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl FromIterator<(i32, i32)> for OpenAddressHashTable {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        let mut table = OpenAddressHashTable::new();
        table.extend(iter);
        table
    }
}

impl Debug for OpenAddressHashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let slots: Vec<DebugRaw> = self.slots.iter()
            .map(|slot| DebugRaw(match slot {
                Slot::Empty => "-".into(),
                Slot::Deleted => "x".into(),
                Slot::Occupied { key, value } => format!("({key}: {value})"),
            }))
            .collect();

        f.debug_struct("OpenAddressHashTable")
            .field("slots", &slots)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("tombstones", &self.tombstones)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl Display for OpenAddressHashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
