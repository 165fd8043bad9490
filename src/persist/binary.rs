//! The binary format: little-endian `i32`s laid out exactly like the text format, five header
//! fields followed by `size` key-value pairs.

use std::io::{self, ErrorKind, Read, Write};

use log::debug;

use super::{Header, InvalidFileFormat, PersistError};
use crate::collections::hash::HashTable;

pub(crate) fn write<T, W>(table: &T, mut writer: W) -> Result<(), PersistError>
where
    T: HashTable + ?Sized,
    W: Write,
{
    let header = Header::of(table)?;
    for field in header.fields() {
        writer.write_all(&field.to_le_bytes())?;
    }

    for (key, value) in table.iter() {
        writer.write_all(&key.to_le_bytes())?;
        writer.write_all(&value.to_le_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

pub(crate) fn read<T, R>(table: &mut T, mut reader: R) -> Result<(), PersistError>
where
    T: HashTable + ?Sized,
    R: Read,
{
    let mut fields = [0_i32; Header::FIELDS];
    for field in fields.iter_mut() {
        *field = read_i32(&mut reader).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => InvalidFileFormat { reason: "truncated header" }.into(),
            _ => PersistError::from(e),
        })?;
    }

    let header = Header::from_fields(fields);
    header.apply(table)?;

    for entry_no in 0..header.entries() {
        // A partial trailing entry is dropped along with anything after it.
        let entry = read_i32(&mut reader).and_then(|key| Ok((key, read_i32(&mut reader)?)));

        match entry {
            Ok((key, value)) => {
                table.insert(key, value);
            },
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                debug!("Binary input ended after {entry_no} of {} entries", header.entries());
                break;
            },
            Err(e) => return Err(e.into()),
        }
    }

    debug!("Loaded {} entries from binary", table.len());
    Ok(())
}

fn read_i32<R: Read>(reader: &mut R) -> io::Result<i32> {
    let mut bytes = [0; 4];
    reader.read_exact(&mut bytes)?;
    Ok(i32::from_le_bytes(bytes))
}
