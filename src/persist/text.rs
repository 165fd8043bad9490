//! The whitespace separated text format.
//!
//! ```text
//! size capacity a b p
//! key value
//! key value
//! ...
//! ```

use std::io::{BufRead, Write};
use std::str;

use log::{debug, trace};

use super::{Header, InvalidFileFormat, PersistError};
use crate::collections::hash::HashTable;

pub(crate) fn write<T, W>(table: &T, mut writer: W) -> Result<(), PersistError>
where
    T: HashTable + ?Sized,
    W: Write,
{
    let header = Header::of(table)?;
    let [size, cap, a, b, p] = header.fields();
    writeln!(writer, "{size} {cap} {a} {b} {p}")?;

    for (key, value) in table.iter() {
        writeln!(writer, "{key} {value}")?;
    }

    writer.flush()?;
    Ok(())
}

pub(crate) fn read<T, R>(table: &mut T, reader: R) -> Result<(), PersistError>
where
    T: HashTable + ?Sized,
    R: BufRead,
{
    // Lines are split as raw bytes, so bytes that aren't UTF-8 make a line malformed rather than
    // failing the read.
    let mut lines = reader.split(b'\n');

    let header = match lines.next() {
        Some(line) => parse_header(&line?)?,
        None => return Err(InvalidFileFormat { reason: "missing header" }.into()),
    };
    header.apply(table)?;

    let mut skipped = 0_usize;
    // Malformed lines still count towards the announced size.
    for line_no in 0..header.entries() {
        let Some(line) = lines.next() else {
            debug!("Text input ended after {line_no} of {} entries", header.entries());
            break;
        };
        let line = line?;

        match parse_entry(&line) {
            Some((key, value)) => {
                table.insert(key, value);
            },
            None => {
                trace!("Skipping malformed entry line {:?}", String::from_utf8_lossy(&line));
                skipped += 1;
            },
        }
    }

    debug!(
        "Loaded {} entries from text ({} malformed lines skipped)",
        table.len(), skipped
    );
    Ok(())
}

fn fields(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(u8::is_ascii_whitespace).filter(|field| !field.is_empty())
}

fn parse_field(field: &[u8]) -> Option<i32> {
    str::from_utf8(field).ok()?.parse().ok()
}

fn parse_header(line: &[u8]) -> Result<Header, InvalidFileFormat> {
    let mut values = [0_i32; Header::FIELDS];
    let mut parts = fields(line);

    for value in values.iter_mut() {
        let part = parts.next().ok_or(InvalidFileFormat {
            reason: "header needs 5 fields",
        })?;
        *value = parse_field(part).ok_or(InvalidFileFormat {
            reason: "header fields must be 32-bit integers",
        })?;
    }

    Ok(Header::from_fields(values))
}

/// Parses a `key value` line, ignoring anything after the second field. Lines with fewer than two
/// integer fields yield None.
fn parse_entry(line: &[u8]) -> Option<(i32, i32)> {
    let mut parts = fields(line);
    let key = parse_field(parts.next()?)?;
    let value = parse_field(parts.next()?)?;
    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header(b"5 16 1 0 1000000007"),
            Ok(Header { size: 5, cap: 16, a: 1, b: 0, p: 1_000_000_007 }),
        );
        assert_eq!(
            parse_header(b"  2\t8 3 4 97 trailing"),
            Ok(Header { size: 2, cap: 8, a: 3, b: 4, p: 97 }),
            "Extra whitespace and trailing fields should be tolerated."
        );
        assert!(parse_header(b"5 16 1 0").is_err(), "Four fields aren't enough.");
        assert!(parse_header(b"").is_err());
        assert!(parse_header(b"5 16 one 0 7").is_err());
        assert!(parse_header(b"\xff 16").is_err());
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry(b"1 100"), Some((1, 100)));
        assert_eq!(parse_entry(b"-3   -30 extra"), Some((-3, -30)));
        assert_eq!(parse_entry(b"42"), None);
        assert_eq!(parse_entry(b""), None);
        assert_eq!(parse_entry(b"x 1"), None);
        assert_eq!(parse_entry(b"1 10\r"), Some((1, 10)), "A CRLF line ending is just whitespace.");
        assert_eq!(parse_entry(b"\xff\xfe"), None);
        assert_eq!(parse_entry(b"1 \xff 10"), None);
        assert_eq!(parse_entry(b"1 10 \xff"), Some((1, 10)), "Only the first two fields matter.");
    }
}
