use derive_more::{Display, Error};

/// The requested key has no entry in the table.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Key {key} not found!")]
pub struct KeyNotFound {
    pub key: i32,
}
