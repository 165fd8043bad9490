use std::iter::FusedIterator;
use std::slice::Iter as SlotIter;

use super::{OpenAddressHashTable, Slot};

impl<'a> IntoIterator for &'a OpenAddressHashTable {
    type Item = (i32, i32);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len(),
            inner: self.slots.iter(),
        }
    }
}

/// A borrowed iterator over the entries of an [`OpenAddressHashTable`] in ascending slot order.
pub struct Iter<'a> {
    pub(crate) inner: SlotIter<'a, Slot>,
    pub(crate) len: usize,
}

impl Iterator for Iter<'_> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.by_ref().find_map(Slot::entry)?;
        self.len -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
