use std::io;
use std::path::PathBuf;

use derive_more::{Display, Error, From, IsVariant};

pub use crate::util::error::CapacityOverflow;

#[derive(Debug, Display, Error)]
#[display("cannot open file {}: {source}", path.display())]
pub struct CannotOpenFile {
    pub path: PathBuf,
    pub source: io::Error,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("invalid file format: {reason}")]
pub struct InvalidFileFormat {
    pub reason: &'static str,
}

#[derive(Debug, Display, Error, From)]
#[display("error during I/O: {source}")]
pub struct StreamError {
    pub source: io::Error,
}

/// Any failure while saving or loading a table.
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum PersistError {
    CannotOpenFile(CannotOpenFile),
    InvalidFileFormat(InvalidFileFormat),
    Stream(StreamError),
    CapacityOverflow(CapacityOverflow),
}

impl From<io::Error> for PersistError {
    fn from(value: io::Error) -> Self {
        StreamError::from(value).into()
    }
}
