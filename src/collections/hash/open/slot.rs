use derive_more::IsVariant;

/// A single slot of an [`OpenAddressHashTable`](super::OpenAddressHashTable).
///
/// A slot starts out `Empty`, becomes `Occupied` on insertion and `Deleted` on removal. A deleted
/// slot can be occupied again, but never returns to `Empty` without a resize.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum Slot {
    #[default]
    Empty,
    Occupied {
        key: i32,
        value: i32,
    },
    /// A tombstone. Lookups continue past it, insertions may reuse it.
    Deleted,
}

impl Slot {
    pub const fn entry(&self) -> Option<(i32, i32)> {
        match *self {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        }
    }
}

/// The outcome of walking a key's probe sequence looking for somewhere to put it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probe {
    /// The key is already stored at this index, with this value.
    Found(usize, i32),
    /// The key isn't present and this is the first reusable slot in its sequence.
    Vacant(usize),
    /// Every slot the sequence visits is occupied by another key.
    Exhausted,
}
