use super::{CapacityOverflow, InvalidFileFormat, PersistError};
use crate::collections::hash::{HashTable, LinearHash, normalize_signed_cap};

/// The five integers leading every persisted table: `size capacity a b p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Header {
    pub size: i32,
    pub cap: i32,
    pub a: i32,
    pub b: i32,
    pub p: i32,
}

impl Header {
    pub const FIELDS: usize = 5;

    /// Describes `table` for saving.
    pub fn of<T: HashTable + ?Sized>(table: &T) -> Result<Header, PersistError> {
        let cap = table.cap();
        let cap = i32::try_from(cap).map_err(|_| CapacityOverflow { cap })?;
        // len never exceeds cap.
        let size = table.len() as i32;
        let hasher = table.hasher();

        Ok(Header {
            size,
            cap,
            a: hasher.a(),
            b: hasher.b(),
            p: hasher.p(),
        })
    }

    pub fn from_fields(fields: [i32; Header::FIELDS]) -> Header {
        let [size, cap, a, b, p] = fields;
        Header { size, cap, a, b, p }
    }

    pub const fn fields(&self) -> [i32; Header::FIELDS] {
        [self.size, self.cap, self.a, self.b, self.p]
    }

    /// Returns the number of entries the header announces. A negative count announces none.
    pub fn entries(&self) -> usize {
        usize::try_from(self.size).unwrap_or(0)
    }

    /// Empties `table` and resizes it to the stated capacity and hash parameters, ready for the
    /// entries to be replayed. The table is left untouched if the header is unusable.
    pub fn apply<T: HashTable + ?Sized>(&self, table: &mut T) -> Result<(), InvalidFileFormat> {
        let hasher = LinearHash::new(self.a, self.b, self.p).ok_or(InvalidFileFormat {
            reason: "hash modulus must be positive",
        })?;

        table.reset(normalize_signed_cap(self.cap as i64), hasher);
        Ok(())
    }
}
