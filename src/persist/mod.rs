//! Saving and loading hash tables as text or binary.
//!
//! Both formats start with the header `size capacity a b p` and follow it with one key-value pair
//! per entry, in the order the table iterates. Loading reallocates the table at the stated capacity
//! and hash parameters and then replays every pair through the table's own `insert`, so a loaded
//! table respects the usual resize thresholds and may end up with a different layout (or
//! capacity) than the one that was saved. The set of entries is always the same.
//!
//! Some damage is tolerated rather than reported:
//! - Text entry lines with fewer than two integer fields are skipped.
//! - Input ending before the announced number of entries simply ends the load.
//!
//! A missing or short header is an [`InvalidFileFormat`] error, and failing to open a file is a
//! [`CannotOpenFile`] error, each carried by [`PersistError`].
//!
//! Every [`HashTable`] implements [`Persist`].

mod binary;
mod error;
mod header;
mod text;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

pub use error::*;
pub(crate) use header::*;

use crate::collections::hash::HashTable;

/// Text and binary persistence for hash tables.
pub trait Persist: HashTable {
    /// Writes the table to `writer` in the text format.
    fn write_text<W: Write>(&self, writer: W) -> Result<(), PersistError> {
        text::write(self, writer)
    }

    /// Replaces the contents of the table with those read from `reader` in the text format.
    fn read_text<R: BufRead>(&mut self, reader: R) -> Result<(), PersistError> {
        text::read(self, reader)
    }

    /// Writes the table to `writer` in the binary format.
    fn write_binary<W: Write>(&self, writer: W) -> Result<(), PersistError> {
        binary::write(self, writer)
    }

    /// Replaces the contents of the table with those read from `reader` in the binary format.
    fn read_binary<R: Read>(&mut self, reader: R) -> Result<(), PersistError> {
        binary::read(self, reader)
    }

    /// Creates (or truncates) the file at `path` and saves the table to it as text.
    fn save_text<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        self.write_text(BufWriter::new(create(path.as_ref())?))
    }

    /// Loads the table from the text file at `path`.
    fn load_text<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        self.read_text(BufReader::new(open(path.as_ref())?))
    }

    /// Creates (or truncates) the file at `path` and saves the table to it in binary.
    fn save_binary<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        self.write_binary(BufWriter::new(create(path.as_ref())?))
    }

    /// Loads the table from the binary file at `path`.
    fn load_binary<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        self.read_binary(BufReader::new(open(path.as_ref())?))
    }
}

impl<T: HashTable> Persist for T {}

fn create(path: &Path) -> Result<File, CannotOpenFile> {
    File::create(path).map_err(|source| CannotOpenFile {
        path: path.to_path_buf(),
        source,
    })
}

fn open(path: &Path) -> Result<File, CannotOpenFile> {
    File::open(path).map_err(|source| CannotOpenFile {
        path: path.to_path_buf(),
        source,
    })
}
