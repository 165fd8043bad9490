use std::iter::FusedIterator;

use super::{ChainedHashTable, Link};

impl<'a> IntoIterator for &'a ChainedHashTable {
    type Item = (i32, i32);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            table: self,
            bucket: 0,
            current: None,
            len: self.len(),
        }
    }
}

/// A borrowed iterator over the entries of a [`ChainedHashTable`], visiting buckets in order and
/// each chain from its head.
pub struct Iter<'a> {
    pub(crate) table: &'a ChainedHashTable,
    pub(crate) bucket: usize,
    pub(crate) current: Link,
    pub(crate) len: usize,
}

impl Iterator for Iter<'_> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(id) = self.current {
                let node = &self.table.nodes[id];
                self.current = node.next;
                self.len -= 1;
                return Some((node.key, node.value));
            }

            // Move on to the next non-empty bucket.
            let head = self.table.buckets.get(self.bucket)?;
            self.current = *head;
            self.bucket += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
