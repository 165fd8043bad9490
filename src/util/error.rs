use derive_more::{Display, Error};

/// A capacity too large to be written as a 32-bit integer.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity {cap} can't be represented in a 32-bit header!")]
pub struct CapacityOverflow {
    /// The offending capacity.
    pub cap: usize,
}
