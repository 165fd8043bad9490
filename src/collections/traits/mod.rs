//! Traits shared between collections with interchangeable implementations.

mod table;

pub use table::*;
